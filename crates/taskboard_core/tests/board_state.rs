use taskboard_core::{BoardEvent, BoardState, Flash, FlashScope};

#[test]
fn initial_state_has_nothing_selected_and_empty_buffers() {
    let state = BoardState::new();

    assert_eq!(state.selected_project, None);
    assert_eq!(state.task_name, "");
    assert_eq!(state.editing_task, None);
    assert_eq!(state.new_project_name, "");
    assert_eq!(state.flash, None);
}

#[test]
fn selecting_another_project_resets_all_buffers() {
    let state = BoardState::new()
        .apply(BoardEvent::ProjectSelected(Some(1)))
        .apply(BoardEvent::TaskNameEdited("half-typed".to_string()))
        .apply(BoardEvent::NewProjectNameEdited("new one".to_string()))
        .apply(BoardEvent::TaskEditStarted {
            task_id: 9,
            current_name: "editing".to_string(),
        });

    let state = state.apply(BoardEvent::ProjectSelected(Some(2)));

    assert_eq!(state.selected_project, Some(2));
    assert_eq!(state.task_name, "");
    assert_eq!(state.editing_task, None);
    assert_eq!(state.new_project_name, "");
}

#[test]
fn reselecting_the_same_project_keeps_buffers() {
    let state = BoardState::new()
        .apply(BoardEvent::ProjectSelected(Some(1)))
        .apply(BoardEvent::TaskNameEdited("keep me".to_string()))
        .apply(BoardEvent::ProjectSelected(Some(1)));

    assert_eq!(state.task_name, "keep me");
}

#[test]
fn starting_an_edit_prefills_the_task_buffer() {
    let state = BoardState::new()
        .apply(BoardEvent::ProjectSelected(Some(1)))
        .apply(BoardEvent::TaskEditStarted {
            task_id: 5,
            current_name: "wash the car".to_string(),
        });

    assert_eq!(state.editing_task, Some(5));
    assert_eq!(state.task_name, "wash the car");
    assert_eq!(state.selected_project, Some(1));
}

#[test]
fn successful_task_mutations_clear_task_buffers() {
    for terminal in [BoardEvent::TaskSaved, BoardEvent::TaskDeleted] {
        let state = BoardState::new()
            .apply(BoardEvent::ProjectSelected(Some(1)))
            .apply(BoardEvent::TaskEditStarted {
                task_id: 5,
                current_name: "in flight".to_string(),
            })
            .apply(terminal);

        assert_eq!(state.task_name, "");
        assert_eq!(state.editing_task, None);
        // Selection survives task mutations.
        assert_eq!(state.selected_project, Some(1));
    }
}

#[test]
fn failed_task_mutation_keeps_buffers_and_sets_task_flash() {
    let state = BoardState::new()
        .apply(BoardEvent::ProjectSelected(Some(1)))
        .apply(BoardEvent::TaskEditStarted {
            task_id: 5,
            current_name: "retry me".to_string(),
        })
        .apply(BoardEvent::TaskActionFailed(
            "Failed to update the task. Please try again.".to_string(),
        ));

    assert_eq!(state.task_name, "retry me");
    assert_eq!(state.editing_task, Some(5));
    assert_eq!(
        state.flash,
        Some(Flash::task("Failed to update the task. Please try again."))
    );
    assert_eq!(state.flash.as_ref().unwrap().scope, FlashScope::Task);
}

#[test]
fn flash_survives_exactly_one_transition() {
    let state = BoardState::new()
        .apply(BoardEvent::TaskActionFailed("boom".to_string()))
        .apply(BoardEvent::TaskNameEdited("typing again".to_string()));

    assert_eq!(state.flash, None);
    assert_eq!(state.task_name, "typing again");
}

#[test]
fn successful_project_creation_selects_it_and_clears_buffers() {
    let state = BoardState::new()
        .apply(BoardEvent::ProjectSelected(Some(1)))
        .apply(BoardEvent::TaskNameEdited("stale".to_string()))
        .apply(BoardEvent::NewProjectNameEdited("Website".to_string()))
        .apply(BoardEvent::ProjectCreated(7));

    assert_eq!(state.selected_project, Some(7));
    assert_eq!(state.task_name, "");
    assert_eq!(state.editing_task, None);
    assert_eq!(state.new_project_name, "");
}

#[test]
fn failed_project_creation_keeps_buffer_and_sets_project_flash() {
    let state = BoardState::new()
        .apply(BoardEvent::NewProjectNameEdited("Website".to_string()))
        .apply(BoardEvent::ProjectActionFailed(
            "Failed to create the project. Please try again.".to_string(),
        ));

    assert_eq!(state.new_project_name, "Website");
    assert_eq!(state.flash.as_ref().unwrap().scope, FlashScope::Project);
}

#[test]
fn deleting_the_selected_project_clears_selection_and_buffers() {
    let state = BoardState::new()
        .apply(BoardEvent::ProjectSelected(Some(3)))
        .apply(BoardEvent::TaskNameEdited("stale".to_string()))
        .apply(BoardEvent::ProjectDeleted);

    assert_eq!(state, BoardState::new());
}

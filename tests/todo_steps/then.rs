//! Then steps for todo lifecycle BDD scenarios.

use super::world::{TodoWorld, parse_id, run_async};
use rstest_bdd_macros::then;
use todddo::todo::services::{CreateTodoError, GetTodoError, UpdateTodoError};

#[then(r#"the deleted todo has id {id:u64} and task "{task}""#)]
fn deleted_todo_matches(world: &TodoWorld, id: u64, task: String) -> Result<(), eyre::Report> {
    let result = world
        .last_delete_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing delete result in scenario world"))?;
    let removed = result
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected delete failure: {err}"))?;

    if removed.id() != parse_id(id)? || removed.task().as_str() != task {
        return Err(eyre::eyre!("deleted todo mismatch: {removed:?}"));
    }
    Ok(())
}

#[then("listing returns only the todo with id {id:u64}")]
fn listing_returns_single_todo(world: &TodoWorld, id: u64) -> Result<(), eyre::Report> {
    let expected = parse_id(id)?;
    let listed = run_async(world.service.list());
    let ids: Vec<_> = listed.iter().map(|todo| todo.id()).collect();
    if ids != vec![expected] {
        return Err(eyre::eyre!("expected only todo {expected}, listed {ids:?}"));
    }
    Ok(())
}

#[then("listing returns no todos")]
fn listing_returns_no_todos(world: &TodoWorld) -> Result<(), eyre::Report> {
    let listed = run_async(world.service.list());
    if !listed.is_empty() {
        return Err(eyre::eyre!("expected no todos, listed {}", listed.len()));
    }
    Ok(())
}

#[then("fetching the todo with id {id:u64} reports no such todo")]
fn fetch_reports_missing(world: &TodoWorld, id: u64) -> Result<(), eyre::Report> {
    let todo_id = parse_id(id)?;
    let result = run_async(world.service.get(todo_id));
    if result != Err(GetTodoError::NoSuchTodo(todo_id)) {
        return Err(eyre::eyre!("expected no such todo, got {result:?}"));
    }
    Ok(())
}

#[then(r#"fetching the todo with id {id:u64} returns task "{task}""#)]
fn fetch_returns_task(world: &TodoWorld, id: u64, task: String) -> Result<(), eyre::Report> {
    let todo = run_async(world.service.get(parse_id(id)?))
        .map_err(|err| eyre::eyre!("lookup failed: {err}"))?;
    if todo.task().as_str() != task {
        return Err(eyre::eyre!(
            "expected task {task:?}, found {:?}",
            todo.task().as_str()
        ));
    }
    Ok(())
}

#[then("creation fails with an empty task error")]
fn creation_fails_with_empty_task(world: &TodoWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_create_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing create result in scenario world"))?;
    if !matches!(result, Err(CreateTodoError::EmptyTask)) {
        return Err(eyre::eyre!("expected empty task error, got {result:?}"));
    }
    Ok(())
}

#[then("the update fails with no such todo for id {id:u64}")]
fn update_fails_with_missing_todo(world: &TodoWorld, id: u64) -> Result<(), eyre::Report> {
    let expected = parse_id(id)?;
    let result = world
        .last_update_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing update result in scenario world"))?;
    if result != &Err(UpdateTodoError::NoSuchTodo(expected)) {
        return Err(eyre::eyre!("expected no such todo {expected}, got {result:?}"));
    }
    Ok(())
}

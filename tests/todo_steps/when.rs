//! When steps for todo lifecycle BDD scenarios.

use super::world::{TodoWorld, parse_id, run_async};
use rstest_bdd_macros::when;
use todddo::todo::domain::{Task, Todo};

#[when(r#"a todo is created with task "{task}""#)]
fn create_todo(world: &mut TodoWorld, task: String) {
    world.last_create_result = Some(run_async(world.service.create(Task::new(task))));
}

#[when("a todo is created with a blank task")]
fn create_blank_todo(world: &mut TodoWorld) {
    world.last_create_result = Some(run_async(world.service.create(Task::new("   "))));
}

#[when("the todo with id {id:u64} is deleted")]
fn delete_todo(world: &mut TodoWorld, id: u64) -> Result<(), eyre::Report> {
    let todo_id = parse_id(id)?;
    world.last_delete_result = Some(run_async(world.service.delete(todo_id)));
    Ok(())
}

#[when(r#"the todo with id {id:u64} is updated to task "{task}""#)]
fn update_todo(world: &mut TodoWorld, id: u64, task: String) -> Result<(), eyre::Report> {
    let todo = Todo::new(parse_id(id)?, Task::new(task));
    world.last_update_result = Some(run_async(world.service.update(todo)));
    Ok(())
}

//! When steps for task CRUD BDD scenarios.

use super::world::{TaskCrudWorld, encode};
use rstest_bdd_macros::when;

fn task_form(title: &str, description: &str, complete: bool) -> String {
    let checkbox = if complete { "&complete=1" } else { "" };
    format!(
        "task_title={}&task_description={}{checkbox}&submit=Submit",
        encode(title),
        encode(description)
    )
}

#[when(r#"a task titled "{title}" described "{description}" is submitted as complete"#)]
fn submit_complete(
    world: &mut TaskCrudWorld,
    title: String,
    description: String,
) -> Result<(), eyre::Report> {
    world.post_form("/tasks/submit", task_form(&title, &description, true))
}

#[when(r#"a task titled "{title}" described "{description}" is submitted as incomplete"#)]
fn submit_incomplete(
    world: &mut TaskCrudWorld,
    title: String,
    description: String,
) -> Result<(), eyre::Report> {
    world.post_form("/tasks/submit", task_form(&title, &description, false))
}

#[when("page size option {option:usize} is chosen")]
fn choose_page_size(world: &mut TaskCrudWorld, option: usize) -> Result<(), eyre::Report> {
    world.get(&format!("/tasks/set_per_page/{option}"))
}

#[when("the task list is opened")]
fn open_list(world: &mut TaskCrudWorld) -> Result<(), eyre::Report> {
    world.get("/tasks/manage")
}

#[when("deletion of task {id:i64} is confirmed")]
fn confirm_deletion(world: &mut TaskCrudWorld, id: i64) -> Result<(), eyre::Report> {
    world.post_form(
        &format!("/tasks/submit_delete/{id}"),
        format!("submit={}", encode("Yes - Delete Now")),
    )
}

#[when("task {id:i64} is opened")]
fn open_task(world: &mut TaskCrudWorld, id: i64) -> Result<(), eyre::Report> {
    world.get(&format!("/tasks/show/{id}"))
}

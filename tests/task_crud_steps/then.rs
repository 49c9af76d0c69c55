//! Then steps for task CRUD BDD scenarios.

use super::world::{TaskCrudWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::then;
use taskboard::task::{domain::TaskId, ports::TaskRepository};

#[then(r#"the browser is redirected to "{location}""#)]
fn redirected_to(world: &TaskCrudWorld, location: String) -> Result<(), eyre::Report> {
    let last = world.last()?;
    eyre::ensure!(
        last.location.as_deref() == Some(location.as_str()),
        "expected redirect to {location}, got {:?} (status {})",
        last.location,
        last.status
    );
    Ok(())
}

#[then(r#"the next page shows "{text}""#)]
fn next_page_shows(world: &mut TaskCrudWorld, text: String) -> Result<(), eyre::Report> {
    let location = world
        .last()?
        .location
        .clone()
        .ok_or_else(|| eyre::eyre!("last response was not a redirect"))?;
    world.get(&location)?;
    page_shows(world, text)
}

#[then(r#"the page after that does not show "{text}""#)]
fn reload_hides(world: &mut TaskCrudWorld, text: String) -> Result<(), eyre::Report> {
    world.get("/tasks/show/1")?;
    eyre::ensure!(
        !world.last()?.body.contains(&text),
        "expected the page not to show {text:?}"
    );
    Ok(())
}

#[then(r#"the page shows "{text}""#)]
fn page_shows(world: &TaskCrudWorld, text: String) -> Result<(), eyre::Report> {
    let last = world.last()?;
    eyre::ensure!(
        last.body.contains(&text),
        "expected the page to show {text:?} (status {})",
        last.status
    );
    Ok(())
}

#[then("the page status is {status:u16}")]
fn page_status(world: &TaskCrudWorld, status: u16) -> Result<(), eyre::Report> {
    let actual = world.last()?.status.as_u16();
    eyre::ensure!(actual == status, "expected status {status}, got {actual}");
    Ok(())
}

#[then("the board holds {count:u64} tasks")]
fn board_holds(world: &TaskCrudWorld, count: u64) -> Result<(), eyre::Report> {
    let actual = run_async(world.repo.count_all()).wrap_err("count tasks")?;
    eyre::ensure!(actual == count, "expected {count} tasks, found {actual}");
    Ok(())
}

#[then(r#"task {id:i64} has description "{description}""#)]
fn task_has_description(
    world: &TaskCrudWorld,
    id: i64,
    description: String,
) -> Result<(), eyre::Report> {
    let task_id = TaskId::new(id)?;
    let task = run_async(world.repo.find_by_id(task_id))
        .wrap_err("look up task")?
        .ok_or_else(|| eyre::eyre!("task {id} not found"))?;
    eyre::ensure!(
        task.description() == description,
        "expected description {description:?}, found {:?}",
        task.description()
    );
    Ok(())
}

//! Given steps for task CRUD BDD scenarios.

use super::world::{TaskCrudWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::task::{domain::TaskRecord, ports::TaskRepository};

#[given("an empty task board")]
fn empty_board(world: &mut TaskCrudWorld) -> Result<(), eyre::Report> {
    let count = run_async(world.repo.count_all()).wrap_err("count tasks")?;
    eyre::ensure!(count == 0, "expected an empty board, found {count} tasks");
    Ok(())
}

#[given("a task board holding {count:usize} tasks")]
fn board_with_tasks(world: &mut TaskCrudWorld, count: usize) -> Result<(), eyre::Report> {
    for number in 1..=count {
        let record = TaskRecord::new(format!("Task {number}"), "Seeded task", false);
        run_async(world.repo.insert(&record)).wrap_err("seed task")?;
    }
    Ok(())
}

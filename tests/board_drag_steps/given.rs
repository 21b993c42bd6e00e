//! Given steps for board drag BDD scenarios.

use super::world::{BoardWorld, run_async, titles};
use corkboard::board::{adapters::memory::StoreOperation, ports::EntityStore};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"a board with columns "{columns}""#)]
fn board_with_columns(world: &mut BoardWorld, columns: String) -> Result<(), eyre::Report> {
    let board_id = world.handle.board_id();
    for (title, order) in titles(&columns).iter().zip(0_i64..) {
        run_async(world.store.create_column(&board_id, title, order))
            .wrap_err_with(|| format!("create column {title}"))?;
    }
    world.reload()
}

#[given(r#"column "{column}" holds tasks "{tasks}""#)]
fn column_holds_tasks(
    world: &mut BoardWorld,
    column: String,
    tasks: String,
) -> Result<(), eyre::Report> {
    let board_id = world.handle.board_id();
    let column_id = world.column_id(&column)?;
    for title in titles(&tasks) {
        let task = run_async(world.store.create_task(&board_id, &column_id, &title, None))
            .wrap_err_with(|| format!("create task {title}"))?;
        world.seeded_task_ids.insert(title, task.id().clone());
    }
    world.reload()
}

#[given("the store rejects the next task creation")]
fn store_rejects_next_task_creation(world: &mut BoardWorld) {
    world.store.fail_next(StoreOperation::CreateTask);
}

//! What survives a reload after moves.

use std::sync::Arc;

use super::helpers::{column_titles, load_board, seed_board, store, task_titles};
use corkboard::{
    board::adapters::memory::InMemoryEntityStore,
    config::{EngineConfig, MoveConfig},
    drag::{DragId, MovePlan, NoOpReason, classify, classify_raw},
    moves::{MoveExecutor, PersistenceReport},
    ordering::BoardCommand,
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn column_order_survives_reload(
    store: Arc<InMemoryEntityStore>,
) -> Result<(), eyre::Report> {
    let board = seed_board(&store, &[("A", &[]), ("B", &[]), ("C", &[]), ("D", &[])]).await?;
    let executor = MoveExecutor::new(Arc::clone(&store), MoveConfig::default());

    for plan in [
        MovePlan::ReorderColumns { from: 0, to: 3 },
        MovePlan::ReorderColumns { from: 2, to: 0 },
    ] {
        executor.execute(&board.handle, plan).settle().await;
    }

    let reloaded = load_board(&store).await?;
    assert_eq!(column_titles(&reloaded), vec!["D", "B", "C", "A"]);
    assert_eq!(column_titles(&reloaded), column_titles(&board.handle));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn affected_range_scope_still_reloads_in_display_order(
    store: Arc<InMemoryEntityStore>,
) -> Result<(), eyre::Report> {
    let board = seed_board(&store, &[("A", &[]), ("B", &[]), ("C", &[])]).await?;
    let config = EngineConfig::from_toml_str("[moves]\ncolumn_order_scope = \"affected_range\"\n")?;
    let executor = MoveExecutor::new(Arc::clone(&store), config.moves);

    executor
        .execute(&board.handle, MovePlan::ReorderColumns { from: 2, to: 1 })
        .settle()
        .await;

    let reloaded = load_board(&store).await?;
    assert_eq!(column_titles(&reloaded), vec!["A", "C", "B"]);
    assert_eq!(column_titles(&reloaded), column_titles(&board.handle));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cross_column_moves_conserve_tasks(
    store: Arc<InMemoryEntityStore>,
) -> Result<(), eyre::Report> {
    let board = seed_board(&store, &[("X", &["t1", "t2"]), ("Y", &["t3"]), ("Z", &[])]).await?;
    let executor = MoveExecutor::new(Arc::clone(&store), MoveConfig::default());
    let total_before = board.handle.read(|state| state.total_task_count());

    for (active, over) in [("t1", "Z"), ("t3", "Z"), ("t2", "Y")] {
        let plan = board.handle.read(|state| {
            let task = state.all_tasks().find(|task| task.title() == active).cloned();
            let column = state.columns().iter().find(|column| column.title() == over).cloned();
            task.zip(column).map(|(task, column)| {
                classify(
                    &DragId::Task(task.id().clone()),
                    Some(&DragId::Column(column.id().clone())),
                    state,
                )
            })
        });
        let plan = plan.ok_or_else(|| eyre::eyre!("missing {active} or {over}"))?;
        let report = executor.execute(&board.handle, plan).settle().await;
        eyre::ensure!(
            matches!(report, PersistenceReport::TaskMoved { .. }),
            "move of {active} to {over} failed: {report:?}"
        );
    }

    assert_eq!(board.handle.read(|state| state.total_task_count()), total_before);
    let reloaded = load_board(&store).await?;
    assert_eq!(reloaded.read(|state| state.total_task_count()), total_before);
    let (x, y, z) = (board.column(0)?, board.column(1)?, board.column(2)?);
    assert!(task_titles(&reloaded, &x).is_empty());
    assert_eq!(task_titles(&reloaded, &y), vec!["t2"]);
    assert_eq!(task_titles(&reloaded, &z), vec!["t1", "t3"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_order_within_a_column_is_not_persisted(
    store: Arc<InMemoryEntityStore>,
) -> Result<(), eyre::Report> {
    let board = seed_board(&store, &[("todo", &["t1", "t2", "t3"])]).await?;
    let todo = board.column(0)?;

    board.handle.dispatch(BoardCommand::ReorderTasks {
        column_id: todo.clone(),
        from: 0,
        to: 2,
    });
    let reloaded = load_board(&store).await?;

    assert_eq!(task_titles(&board.handle, &todo), vec!["t2", "t3", "t1"]);
    assert_eq!(task_titles(&reloaded, &todo), vec!["t1", "t2", "t3"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unrecognised_drop_target_is_ignored(
    store: Arc<InMemoryEntityStore>,
) -> Result<(), eyre::Report> {
    let board = seed_board(&store, &[("todo", &["t1"])]).await?;
    let executor = MoveExecutor::new(Arc::clone(&store), MoveConfig::default());
    let before = board.handle.snapshot();
    let calls_before = store.total_calls();
    let active = board
        .handle
        .read(|state| state.all_tasks().next().map(|task| DragId::Task(task.id().clone())))
        .ok_or_else(|| eyre::eyre!("t1 not loaded"))?;

    let plan = board
        .handle
        .read(|state| classify_raw(&active.to_string(), Some("sidebar-1"), state));
    let ticket = executor.execute(&board.handle, plan);

    assert_eq!(ticket.plan(), &MovePlan::NoOp(NoOpReason::UnrecognisedTarget));
    assert_eq!(board.handle.snapshot(), before);
    assert_eq!(store.total_calls(), calls_before);
    Ok(())
}

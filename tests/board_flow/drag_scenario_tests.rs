//! Pointer gestures driven through the board coordinator.

use std::sync::Arc;

use super::helpers::{
    SeededBoard, board_layout, column_titles, seed_board, store, stored_task_titles, task_titles,
};
use corkboard::{
    board::adapters::memory::{InMemoryEntityStore, StoreOperation},
    config::EngineConfig,
    coordinator::BoardCoordinator,
    drag::{DragId, MovePlan, Point},
    moves::PersistenceReport,
};
use rstest::rstest;

fn coordinator(
    store: &Arc<InMemoryEntityStore>,
    board: &SeededBoard,
) -> BoardCoordinator<InMemoryEntityStore> {
    let mut coordinator = BoardCoordinator::new(
        board.handle.clone(),
        Arc::clone(store),
        &EngineConfig::default(),
    );
    for (id, rect) in board_layout(&board.handle) {
        coordinator.register(id, rect);
    }
    coordinator
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dragging_first_column_onto_last_reorders_and_persists(
    store: Arc<InMemoryEntityStore>,
) -> Result<(), eyre::Report> {
    let board = seed_board(&store, &[("A", &[]), ("B", &[]), ("C", &[])]).await?;
    let mut coordinator = coordinator(&store, &board);
    let active = DragId::Column(board.column(0)?);

    assert!(coordinator.pointer_down(active, Point::new(50.0, 200.0)));
    coordinator.pointer_move(Point::new(150.0, 200.0));
    let ticket = coordinator
        .pointer_up(Point::new(290.0, 200.0))
        .ok_or_else(|| eyre::eyre!("expected the drag to commit"))?;

    assert_eq!(ticket.plan(), &MovePlan::ReorderColumns { from: 0, to: 2 });
    assert_eq!(column_titles(&board.handle), vec!["B", "C", "A"]);
    let PersistenceReport::ColumnOrders(report) = ticket.settle().await else {
        eyre::bail!("expected column orders to be written");
    };
    eyre::ensure!(report.is_complete(), "column order writes failed");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dragging_task_onto_last_sibling_reorders_locally_only(
    store: Arc<InMemoryEntityStore>,
) -> Result<(), eyre::Report> {
    let board = seed_board(&store, &[("todo", &["t1", "t2", "t3"])]).await?;
    let mut coordinator = coordinator(&store, &board);
    let todo = board.column(0)?;
    let t1 = board
        .handle
        .read(|state| state.tasks(&todo).and_then(|tasks| tasks.first()).cloned())
        .ok_or_else(|| eyre::eyre!("t1 not loaded"))?;
    let calls_before = store.total_calls();

    coordinator.pointer_down(DragId::Task(t1.id().clone()), Point::new(50.0, 60.0));
    coordinator.pointer_move(Point::new(50.0, 110.0));
    let ticket = coordinator
        .pointer_up(Point::new(50.0, 160.0))
        .ok_or_else(|| eyre::eyre!("expected the drag to commit"))?;

    assert!(ticket.applied_locally());
    assert!(!ticket.has_remote_work());
    assert_eq!(task_titles(&board.handle, &todo), vec!["t2", "t3", "t1"]);
    assert_eq!(store.total_calls(), calls_before);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dragging_task_into_other_column_moves_a_copy(
    store: Arc<InMemoryEntityStore>,
) -> Result<(), eyre::Report> {
    let board = seed_board(&store, &[("X", &["t1"]), ("Y", &["t2"])]).await?;
    let mut coordinator = coordinator(&store, &board);
    let (x, y) = (board.column(0)?, board.column(1)?);
    let original = board
        .handle
        .read(|state| state.tasks(&x).and_then(|tasks| tasks.first()).cloned())
        .ok_or_else(|| eyre::eyre!("t1 not loaded"))?;

    coordinator.pointer_down(DragId::Task(original.id().clone()), Point::new(50.0, 60.0));
    coordinator.pointer_move(Point::new(110.0, 200.0));
    let over = coordinator.pointer_move(Point::new(170.0, 370.0));
    assert_eq!(over, Some(DragId::Column(y.clone())));
    let ticket = coordinator
        .pointer_up(Point::new(170.0, 370.0))
        .ok_or_else(|| eyre::eyre!("expected the drag to commit"))?;

    let PersistenceReport::TaskMoved { old_id, new_task } = ticket.settle().await else {
        eyre::bail!("expected the move to persist");
    };
    assert_eq!(&old_id, original.id());
    assert_ne!(new_task.id(), original.id());
    assert_eq!(new_task.title(), original.title());
    assert!(task_titles(&board.handle, &x).is_empty());
    assert_eq!(task_titles(&board.handle, &y), vec!["t2", "t1"]);
    assert!(stored_task_titles(&store, &x).await?.is_empty());
    assert_eq!(stored_task_titles(&store, &y).await?, vec!["t2", "t1"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_copy_leaves_both_columns_unchanged(
    store: Arc<InMemoryEntityStore>,
) -> Result<(), eyre::Report> {
    let board = seed_board(&store, &[("X", &["t1"]), ("Y", &["t2"])]).await?;
    let coordinator = coordinator(&store, &board);
    let (x, y) = (board.column(0)?, board.column(1)?);
    let t1 = board
        .handle
        .read(|state| state.tasks(&x).and_then(|tasks| tasks.first()).cloned())
        .ok_or_else(|| eyre::eyre!("t1 not loaded"))?;
    store.fail_next(StoreOperation::CreateTask);

    let report = coordinator
        .commit(&DragId::Task(t1.id().clone()), Some(&DragId::Column(y.clone())))
        .settle()
        .await;

    assert!(matches!(report, PersistenceReport::TaskMoveFailed(_)));
    assert_eq!(task_titles(&board.handle, &x), vec!["t1"]);
    assert_eq!(task_titles(&board.handle, &y), vec!["t2"]);
    assert_eq!(stored_task_titles(&store, &x).await?, vec!["t1"]);
    assert_eq!(store.call_count(StoreOperation::DeleteTask), 0);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dropping_a_column_back_onto_itself_changes_nothing(
    store: Arc<InMemoryEntityStore>,
) -> Result<(), eyre::Report> {
    let board = seed_board(&store, &[("A", &["t1"]), ("B", &[])]).await?;
    let mut coordinator = coordinator(&store, &board);
    let before = board.handle.snapshot();
    let calls_before = store.total_calls();

    coordinator.pointer_down(DragId::Column(board.column(1)?), Point::new(170.0, 390.0));
    coordinator.pointer_move(Point::new(178.0, 390.0));
    let ticket = coordinator
        .pointer_up(Point::new(178.0, 390.0))
        .ok_or_else(|| eyre::eyre!("expected the drag to commit"))?;

    assert!(ticket.plan().is_noop());
    assert!(!ticket.applied_locally());
    assert_eq!(board.handle.snapshot(), before);
    assert_eq!(store.total_calls(), calls_before);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn click_and_cancel_never_reach_the_board(
    store: Arc<InMemoryEntityStore>,
) -> Result<(), eyre::Report> {
    let board = seed_board(&store, &[("A", &[]), ("B", &[])]).await?;
    let mut coordinator = coordinator(&store, &board);
    let before = board.handle.snapshot();
    let column = DragId::Column(board.column(0)?);

    coordinator.pointer_down(column.clone(), Point::new(50.0, 200.0));
    assert!(coordinator.pointer_up(Point::new(52.0, 201.0)).is_none());

    coordinator.pointer_down(column, Point::new(50.0, 200.0));
    coordinator.pointer_move(Point::new(170.0, 200.0));
    coordinator.cancel();
    assert!(coordinator.pointer_up(Point::new(170.0, 200.0)).is_none());

    assert_eq!(board.handle.snapshot(), before);
    Ok(())
}

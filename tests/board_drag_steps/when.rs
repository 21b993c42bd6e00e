//! When steps for board drag BDD scenarios.

use super::world::BoardWorld;
use corkboard::drag::DragId;
use rstest_bdd_macros::when;

#[when(r#"column "{active}" is dropped onto column "{target}""#)]
fn column_dropped_onto_column(
    world: &mut BoardWorld,
    active: String,
    target: String,
) -> Result<(), eyre::Report> {
    let active = DragId::Column(world.column_id(&active)?);
    let target = DragId::Column(world.column_id(&target)?).to_string();
    world.drop_onto(&active, &target);
    Ok(())
}

#[when(r#"task "{active}" is dropped onto task "{target}""#)]
fn task_dropped_onto_task(
    world: &mut BoardWorld,
    active: String,
    target: String,
) -> Result<(), eyre::Report> {
    let active = DragId::Task(world.task_id(&active)?);
    let target = DragId::Task(world.task_id(&target)?).to_string();
    world.drop_onto(&active, &target);
    Ok(())
}

#[when(r#"task "{active}" is dropped onto column "{target}""#)]
fn task_dropped_onto_column(
    world: &mut BoardWorld,
    active: String,
    target: String,
) -> Result<(), eyre::Report> {
    let active = DragId::Task(world.task_id(&active)?);
    let target = DragId::Column(world.column_id(&target)?).to_string();
    world.drop_onto(&active, &target);
    Ok(())
}

#[when(r#"task "{active}" is dropped onto the element "{element}""#)]
fn task_dropped_onto_element(
    world: &mut BoardWorld,
    active: String,
    element: String,
) -> Result<(), eyre::Report> {
    let active = DragId::Task(world.task_id(&active)?);
    world.drop_onto(&active, &element);
    Ok(())
}

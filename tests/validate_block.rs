//! Integration tests for output record invariants (B001–B004).

mod helpers;

use converter::block::{ModalBlock, SlotConfig, validate_block};
use converter::ids::SequentialIds;
use converter::transform::transform;

use helpers::*;

fn converted_block() -> ModalBlock {
    let root = simple_modal(vec![node("Header"), node("Content"), node("Action")]);
    transform(&root, &mut SequentialIds::new()).unwrap().block
}

#[test]
fn transformed_block_passes() {
    let errors = validate_block(&converted_block());
    assert!(errors.is_empty(), "Expected no validation errors, got: {:?}", errors);
}

#[test]
fn b001_empty_record() {
    let errors = validate_block(&ModalBlock::default());
    assert!(errors.iter().any(|e| e.code == "B001"), "{:?}", errors);
}

#[test]
fn b001_two_blocks() {
    let mut record = converted_block();
    let mut extra = record.get("b_00001").unwrap().clone();
    extra.id = "b_fffff".into();
    record.0.insert(extra.id.clone(), extra);
    let errors = validate_block(&record);
    assert!(errors.iter().any(|e| e.code == "B001"), "{:?}", errors);
}

#[test]
fn b002_key_mismatch() {
    let mut record = converted_block();
    let block = record.0.remove("b_00001").unwrap();
    record.0.insert("b_other".into(), block);
    let errors = validate_block(&record);
    assert!(errors.iter().any(|e| e.code == "B002"), "{:?}", errors);
}

#[test]
fn b003_slot_reuses_id() {
    let mut record = converted_block();
    let block = record.0.get_mut("b_00001").unwrap();
    block.component.slots.footer = Some(SlotConfig::wrapped("b_00002"));
    let errors = validate_block(&record);
    let b003: Vec<_> = errors.iter().filter(|e| e.code == "B003").collect();
    assert_eq!(b003.len(), 1, "{:?}", errors);
    assert!(b003[0].message.contains("footer"));
}

#[test]
fn b003_slot_points_at_modal() {
    let mut record = converted_block();
    let block = record.0.get_mut("b_00001").unwrap();
    block.component.slots.header = Some(SlotConfig::wrapped("b_00001"));
    let errors = validate_block(&record);
    assert!(errors.iter().any(|e| e.code == "B003"), "{:?}", errors);
}

#[test]
fn b004_wrong_parent() {
    let mut record = converted_block();
    record.0.get_mut("b_00001").unwrap().parent_id = "page_2".into();
    let errors = validate_block(&record);
    assert!(errors.iter().any(|e| e.code == "B004"), "{:?}", errors);
}

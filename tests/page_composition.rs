// Document-level tests: block list reordering, per-block field schemas, and
// the JSON round-trip through the persistence layer.

use std::fs;
use std::path::PathBuf;

use helpdeck::core::block::{BlockKind, FieldValue};
use helpdeck::core::document::{starter_page, PageDocument};
use helpdeck::core::persistence::{load_page, save_page};

fn scratch_path(tag: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!(
        "helpdeck_it_{tag}_{}.json",
        std::process::id()
    ));
    path
}

#[test]
fn page_blocks_reorder_like_any_repeater() {
    let mut page = PageDocument::default();
    page.add_block(BlockKind::Header);
    page.add_block(BlockKind::Hero);
    page.add_block(BlockKind::Faq);

    let before = page.clone();
    assert!(!page.move_block_up(0));
    assert!(!page.move_block_down(2));
    assert_eq!(page, before);

    assert!(page.move_block_up(2));
    assert_eq!(page.blocks[1].kind(), BlockKind::Faq);
    assert!(page.move_block_down(1));
    assert_eq!(page, before);
}

#[test]
fn every_declared_field_resolves_on_its_block() {
    for kind in [
        BlockKind::Hero,
        BlockKind::Header,
        BlockKind::Faq,
        BlockKind::CategoryCards,
        BlockKind::PopularArticles,
        BlockKind::NeedHelp,
        BlockKind::ResponseTimes,
        BlockKind::SupportHours,
        BlockKind::ContactForm,
        BlockKind::Footer,
    ] {
        let mut block = kind.create();
        for spec in block.field_specs() {
            assert!(
                block.field(spec.key).is_some(),
                "{kind}: block field '{}' must resolve",
                spec.key
            );
        }
        if block.item_noun().is_some() {
            block.append_item();
            let last = block.items_len() - 1;
            for spec in block.item_specs() {
                assert!(
                    block.item_field(last, spec.key).is_some(),
                    "{kind}: item field '{}' must resolve",
                    spec.key
                );
            }
        }
        if block.supports_rows() {
            block.append_row(0);
            for spec in block.row_specs() {
                assert!(
                    block.row_field(0, 0, spec.key).is_some(),
                    "{kind}: row field '{}' must resolve",
                    spec.key
                );
            }
        }
    }
}

#[test]
fn editing_one_block_leaves_the_rest_of_the_page_untouched() {
    let mut page = starter_page();
    let before = page.clone();

    let faq_index = page
        .blocks
        .iter()
        .position(|block| block.kind() == BlockKind::Faq)
        .expect("starter page has a FAQ block");

    page.blocks[faq_index].set_item_field(
        0,
        "answer",
        FieldValue::Text("Updated answer".to_string()),
    );

    for (index, block) in page.blocks.iter().enumerate() {
        if index != faq_index {
            assert_eq!(block, &before.blocks[index]);
        }
    }
    assert_ne!(page.blocks[faq_index], before.blocks[faq_index]);
}

#[test]
fn starter_page_roundtrips_through_disk() {
    let path = scratch_path("starter");
    let mut page = starter_page();

    // Mutate a little first so the round-trip covers edited state
    page.add_block(BlockKind::Faq);
    let last = page.len() - 1;
    page.blocks[last].append_item();
    page.blocks[last].set_item_field(0, "question", FieldValue::Text("Q?".to_string()));
    assert!(page.move_block_up(last));

    save_page(&path, &page).expect("save");
    let loaded = load_page(&path).expect("load").expect("file exists");
    assert_eq!(page, loaded);

    let _ = fs::remove_file(&path);
}

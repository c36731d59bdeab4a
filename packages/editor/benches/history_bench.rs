use blockpage_editor::{Component, ComponentType, Editor, Intent};
use blockpage_model::{IdGenerator, SequentialIds, TemplateCatalog};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;

/// A realistic page: every block type a few times over
fn landing_page(copies: usize) -> Vec<Component> {
    let catalog = TemplateCatalog::builtin();
    let mut ids = SequentialIds::new("block");
    let mut page = Vec::new();
    for _ in 0..copies {
        for ty in ComponentType::ALL {
            if let Ok(component) = catalog.instantiate(ids.next_id(), ty, None) {
                page.push(component);
            }
        }
    }
    page
}

fn update_text(c: &mut Criterion) {
    c.bench_function("update_text_35_blocks", |b| {
        let mut editor = Editor::new(landing_page(5));
        let mut n = 0u64;
        b.iter(|| {
            n += 1;
            editor.dispatch(black_box(Intent::Update {
                id: "block-1".to_string(),
                content: json!({ "heading": n }).as_object().cloned().unwrap_or_default(),
            }))
        })
    });
}

fn reorder_and_undo(c: &mut Criterion) {
    c.bench_function("reorder_then_undo_35_blocks", |b| {
        let mut editor = Editor::new(landing_page(5));
        b.iter(|| {
            editor.dispatch(black_box(Intent::Reorder {
                source_id: "block-35".to_string(),
                target_id: "block-1".to_string(),
            }));
            editor.dispatch(Intent::Undo)
        })
    });
}

fn fill_history(c: &mut Criterion) {
    c.bench_function("fill_history_past_capacity", |b| {
        b.iter(|| {
            let mut editor = Editor::new(landing_page(2)).with_ids(SequentialIds::new("dup"));
            for _ in 0..100 {
                editor.dispatch(Intent::Duplicate {
                    id: "block-1".to_string(),
                });
            }
            black_box(editor.history().len())
        })
    });
}

criterion_group!(benches, update_text, reorder_and_undo, fill_history);
criterion_main!(benches);

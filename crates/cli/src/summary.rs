//! Fill a box from sampled shapes, apply operations, and summarize the result.

use std::collections::BTreeMap;

use serde::Serialize;
use shapebox::prelude::*;

/// What to do with a freshly filled box.
#[derive(Clone, Debug)]
pub struct FillPlan {
    pub capacity: usize,
    pub count: usize,
    pub seed: u64,
    pub kinds: KindMix,
    /// Extractions applied in order, after filling. Signed so a negative
    /// request is reported the same way as any other out-of-range index.
    pub extract: Vec<i64>,
    pub remove_circles: bool,
}

#[derive(Debug, Serialize)]
pub struct Summary {
    pub capacity: usize,
    pub remaining: usize,
    pub removed: usize,
    pub len: usize,
    pub kinds: BTreeMap<&'static str, usize>,
    pub sum_perimeter: f64,
    pub sum_area: f64,
    pub extracted: Vec<String>,
    pub circles_removed: usize,
    pub errors: Vec<String>,
}

pub fn run_plan(plan: &FillPlan) -> Summary {
    let cfg = SampleCfg {
        kinds: plan.kinds,
        ..SampleCfg::default()
    };
    let mut sb = ShapeBox::new(plan.capacity);
    let mut errors = Vec::new();
    for shape in draw_shapes(cfg, plan.seed, plan.count) {
        if let Err(e) = sb.add_shape(shape) {
            errors.push(e.to_string());
        }
    }

    let mut extracted = Vec::new();
    for &i in &plan.extract {
        let Ok(index) = usize::try_from(i) else {
            errors.push(Operation::ExtractByIndex.index_out_of_range(i));
            continue;
        };
        match sb.extract_by_index(index) {
            Ok(shape) => extracted.push(shape.to_string()),
            Err(e) => errors.push(e.to_string()),
        }
    }

    let mut circles_removed = 0;
    if plan.remove_circles {
        match sb.remove_all_circles() {
            Ok(n) => circles_removed = n,
            Err(e) => errors.push(e.to_string()),
        }
    }

    for e in &errors {
        tracing::info!(error = %e, "operation rejected");
    }
    summarize(&sb, extracted, circles_removed, errors)
}

fn summarize(
    sb: &ShapeBox,
    extracted: Vec<String>,
    circles_removed: usize,
    errors: Vec<String>,
) -> Summary {
    let kinds = ShapeKind::ALL
        .iter()
        .map(|&k| (k.name(), sb.count_kind(k)))
        .collect();
    Summary {
        capacity: sb.capacity(),
        remaining: sb.remaining(),
        removed: sb.removed(),
        len: sb.len(),
        kinds,
        sum_perimeter: sb.sum_perimeter(),
        sum_area: sb.sum_area(),
        extracted,
        circles_removed,
        errors,
    }
}

pub mod format;
pub mod generators;
pub mod schema;
pub mod timer;
pub mod util;

use std::path::PathBuf;

use schema::{Parameter, WorkloadInfo, WorkloadProps};

pub fn fmt_open_err(e: impl ToString, path: &PathBuf) -> String {
    format!("Unable to open {}: {}", path_str(path), e.to_string())
}

pub fn path_str(path: &PathBuf) -> &str {
    path.to_str().unwrap_or("<unknown path>")
}

pub fn xvalues(info: &WorkloadInfo) -> impl Iterator<Item = u32> {
    (info.from..=info.to).step_by(info.step.max(1) as usize)
}

pub fn props_at_x(info: &WorkloadInfo, x: u32) -> WorkloadProps {
    let mut props = info.props.clone();
    let prop = match info.vary {
        Parameter::Size         => &mut props.size,
        Parameter::PatternCount => &mut props.pattern_count,
        Parameter::PatternLen   => &mut props.pattern_len,
        Parameter::EdgeFactor   => &mut props.edge_factor,
        Parameter::QueryRatio   => &mut props.query_ratio,
    };
    *prop = x;

    props
}

/// Seed for one trial at one x-value, so every x gets fresh inputs that
/// still reproduce from the workload seed.
pub fn trial_seed(info: &WorkloadInfo, x: u32, trial: u32) -> u64 {
    info.seed
        .wrapping_mul(0x9e37_79b9_7f4a_7c15)
        .wrapping_add((x as u64) << 32 | trial as u64)
}

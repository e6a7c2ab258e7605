use std::collections::HashMap;

use serde::{Serialize, Deserialize};

pub type WorkloadId = String;
pub type AlgorithmId = String;

// An integer i represents the percentage value i/PERCENT (from 0.0 to 1.0)
pub const PERCENT: u32 = 10000;
pub const PERCENT_F: f64 = PERCENT as f64;

#[derive(Serialize, Deserialize, Debug)]
pub struct Experiment {
    pub experiment: Vec<ExperimentEntry>,
    pub workload: Vec<WorkloadInfo>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ExperimentEntry {
    pub name: String,
    pub title: String,
    pub workload: WorkloadId,
    pub algorithms: Vec<AlgorithmId>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum WorkloadKind {
    Heap,
    SegmentTree,
    Text,
    Graph,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct WorkloadInfo {
    pub name: WorkloadId,
    pub kind: WorkloadKind,
    pub vary: Parameter,
    pub from: u32,
    pub to: u32,
    pub step: u32,
    pub seed: u64,
    pub trials: u32,
    #[serde(flatten)]
    pub props: WorkloadProps,
}

/// Input shape shared by every x-value of a workload. The swept parameter
/// is overwritten per x.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(default)]
pub struct WorkloadProps {
    // log2 of the element, text or node count
    pub size: u32,
    pub pattern_count: u32,
    pub pattern_len: u32,
    pub alphabet: String,
    pub edge_factor: u32,
    pub max_weight: i64,
    pub negative_weights: bool,
    // fraction of segment tree operations that are queries
    pub query_ratio: u32,
}

impl Default for WorkloadProps {
    fn default() -> Self {
        Self {
            size: 10,
            pattern_count: 16,
            pattern_len: 8,
            alphabet: "acgt".to_string(),
            edge_factor: 4,
            max_weight: 100,
            negative_weights: false,
            query_ratio: PERCENT / 2,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    Size,
    PatternCount,
    PatternLen,
    EdgeFactor,
    QueryRatio,
}

impl WorkloadInfo {
    pub fn validate(&self) -> Result<(), String> {
        let fail = |msg: &str| Err(format!("workload {}: {}", self.name, msg));

        if self.step == 0 {
            return fail("step must be positive");
        }
        if self.from > self.to {
            return fail("from must not exceed to");
        }
        if self.trials == 0 {
            return fail("trials must be positive");
        }
        if self.props.alphabet.is_empty() {
            return fail("alphabet must not be empty");
        }
        if self.props.max_weight < 0 {
            return fail("max_weight must not be negative");
        }
        if self.vary == Parameter::QueryRatio && self.to > PERCENT {
            return fail("query_ratio cannot exceed 100%");
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct Results {
    pub experiments: Vec<ExperimentEntry>,
    pub workloads: HashMap<WorkloadId, WorkloadResults>,
}

pub type AlgorithmResults = HashMap<AlgorithmId, Vec<ResultRun>>;

#[derive(Serialize, Deserialize, Debug)]
pub struct WorkloadResults {
    pub info: WorkloadInfo,
    pub algos: AlgorithmResults,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ResultRun {
    pub x: u32,
    // Nanoseconds
    pub times: Vec<u64>,
    pub median: u64,
}

impl ResultRun {
    pub fn new(x: u32) -> Self {
        Self { x, times: Vec::new(), median: 0 }
    }
}

use crate::schema::*;

pub fn format_x(x: u32, info: &WorkloadInfo) -> String {
    match info.vary {
        Parameter::Size => format_size(x),
        Parameter::QueryRatio => format!("{:.2}", x as f64 / PERCENT_F),
        Parameter::PatternCount
        | Parameter::PatternLen
        | Parameter::EdgeFactor => x.to_string(),
    }
}

pub fn format_size(size: u32) -> String {
    match size {
        0..=9   => format!("{}", 1 << size),
        10..=19 => format!("{}Ki", 1 << (size - 10)),
        20..=29 => format!("{}Mi", 1 << (size - 20)),
        30..=39 => format!("{}Gi", 1u64 << (size - 30)),
        _ => size.to_string(),
    }
}

pub fn format_time(nanos: u64) -> String {
    if nanos < 10u64.pow(3) {
        format!("{}ns", nanos)
    }
    else if nanos < 10u64.pow(6) {
        format!("{:.2}µs", nanos as f64 / 10u64.pow(3) as f64)
    }
    else if nanos < 10u64.pow(9) {
        format!("{:.2}ms", nanos as f64 / 10u64.pow(6) as f64)
    }
    else {
        format!("{:.2}s", nanos as f64 / 10u64.pow(9) as f64)
    }
}

pub fn format_xlabel(parameter: Parameter) -> &'static str {
    match parameter {
        Parameter::Size => "size",
        Parameter::PatternCount => "pattern count",
        Parameter::PatternLen => "pattern length",
        Parameter::EdgeFactor => "edges per node",
        Parameter::QueryRatio => "query ratio",
    }
}

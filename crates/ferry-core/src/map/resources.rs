use ferry_proto::{Resource, value};

pub const CPUS: &str = "cpus";
pub const RAM_MB: &str = "mem";
pub const DISK_MB: &str = "disk";
pub const PORTS: &str = "ports";

/// Convert a scalar quantity to thousandths, the resource manager's fixed-point precision.
pub fn to_milli(v: f64) -> u64 {
    if v.is_finite() && v > 0.0 {
        (v * 1000.0).round() as u64
    } else {
        0
    }
}

pub fn from_milli(m: u64) -> f64 {
    m as f64 / 1000.0
}

/// Scalar value of a resource; zero for non-scalar resources.
pub fn scalar_value(r: &Resource) -> f64 {
    r.scalar.as_ref().map_or(0.0, |s| s.value)
}

/// Scalar resource carrying the role and revocability of `src`.
pub fn scalar_resource(src: &Resource, value: f64) -> Resource {
    Resource {
        name: src.name.clone(),
        r#type: value::Type::Scalar as i32,
        scalar: Some(value::Scalar { value }),
        role: src.role.clone(),
        revocable: src.revocable.clone(),
        ..Default::default()
    }
}

/// Ports resource holding exactly `ports`, with the role of `src`.
pub fn port_resource(src: &Resource, ports: &[u64]) -> Resource {
    Resource {
        name: PORTS.to_string(),
        r#type: value::Type::Ranges as i32,
        ranges: Some(to_ranges(ports)),
        role: src.role.clone(),
        ..Default::default()
    }
}

/// Collapse sorted port numbers into contiguous ranges.
pub fn to_ranges(ports: &[u64]) -> value::Ranges {
    let mut range: Vec<value::Range> = Vec::new();
    for &p in ports {
        match range.last_mut() {
            Some(last) if last.end + 1 == p => last.end = p,
            _ => range.push(value::Range { begin: p, end: p }),
        }
    }
    value::Ranges { range }
}

//! Fixed vocabularies for alert synthesis
//!
//! Category fields are drawn uniformly from these lists; changing an
//! entry changes the output of every seeded stream.

/// Event types reported in the `event` field.
pub const EVENT_TYPES: &[&str] = &[
    "Server Downtime",
    "Security Breach",
    "High CPU Usage",
    "Disk Space Low",
    "Network Latency",
];

/// Severity levels for the `severity` field.
pub const SEVERITY_LEVELS: &[&str] = &["Critical", "High", "Medium", "Low"];

/// Urgency levels for the `urgency` field.
pub const URGENCY_LEVELS: &[&str] = &["Immediate", "Expected"];

/// Qualifiers used in the headline template.
pub const HEADLINE_QUALIFIERS: &[&str] = &["Urgent", "Warning"];

/// Impact phrases for description templates.
pub const IMPACTS: &[&str] = &[
    "service outage",
    "performance degradation",
    "data loss risk",
];

/// Recommended-action phrases for description templates.
pub const RECOMMENDED_ACTIONS: &[&str] = &["reboot", "investigate logs", "scale resources"];

/// Current-status phrases for description templates.
pub const CURRENT_STATUSES: &[&str] = &["unresolved", "intermittent", "escalating"];

/// Potential-cause phrases for description templates.
pub const CAUSES: &[&str] = &[
    "hardware failure",
    "configuration error",
    "traffic spike",
];

/// Affected-services phrases for description templates.
pub const SERVICES: &[&str] = &[
    "API endpoints",
    "database queries",
    "user authentication",
];

/// Role segments for `server-` style host names.
pub const HOST_ROLES: &[&str] = &["web", "db", "app"];

/// Prefixes for area codes like `DC-004B`.
pub const AREA_PREFIXES: &[&str] = &["DC", "ZONE", "CLUSTER"];

//! CQL statement set for the `tenant` and `application` tables.
//!
//! Logical schema:
//! - `tenant(tenant_id uuid PRIMARY KEY, secret_key text)`
//! - `application(tenant_id uuid, application_id uuid, name text,
//!   PRIMARY KEY (tenant_id, application_id))`
//!
//! INSERT doubles as update (CQL upsert semantics). Existence checks
//! reuse the point-lookup selects and consume only row presence.

pub const UPSERT_TENANT: &str = "INSERT INTO tenant (tenant_id, secret_key) VALUES (?, ?)";

pub const SELECT_TENANT: &str = "SELECT secret_key FROM tenant WHERE tenant_id = ?";

pub const DELETE_TENANT: &str = "DELETE FROM tenant WHERE tenant_id = ?";

pub const UPSERT_APPLICATION: &str =
    "INSERT INTO application (tenant_id, application_id, name) VALUES (?, ?, ?)";

pub const SELECT_APPLICATION: &str =
    "SELECT name FROM application WHERE tenant_id = ? AND application_id = ?";

pub const SELECT_ALL_APPLICATIONS: &str =
    "SELECT application_id, name FROM application WHERE tenant_id = ?";

pub const DELETE_APPLICATION: &str =
    "DELETE FROM application WHERE tenant_id = ? AND application_id = ?";

pub const DASHBOARD_PATH: &str = "/dashboard";

/// Strict equality, matching the template layer's routing. `/dashboard/` is a
/// different path as far as the backend is concerned.
pub fn is_dashboard_path(path: &str) -> bool {
    path == DASHBOARD_PATH
}

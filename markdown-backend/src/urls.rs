//! Path builders for the document routes.
//!
//! Controllers register routes with the same shapes, so redirects and links
//! built here always resolve.

pub const LIST: &str = "/";
pub const CREATE: &str = "/create/";
pub const ADMIN_INDEX: &str = "/admin/";
pub const MARKDOWNIFY: &str = "/markdownx/markdownify/";

pub fn list_path() -> String {
    LIST.to_string()
}

pub fn detail_path(id: i64) -> String {
    format!("/{}/", id)
}

pub fn create_path() -> String {
    CREATE.to_string()
}

pub fn update_path(id: i64) -> String {
    format!("/{}/update/", id)
}

pub fn admin_changelist_path(model: &str) -> String {
    format!("/admin/{}/", model)
}

pub fn admin_add_path(model: &str) -> String {
    format!("/admin/{}/add/", model)
}

pub fn admin_change_path(model: &str, id: i64) -> String {
    format!("/admin/{}/{}/change/", model, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_paths() {
        assert_eq!(list_path(), "/");
        assert_eq!(detail_path(7), "/7/");
        assert_eq!(create_path(), "/create/");
        assert_eq!(update_path(7), "/7/update/");
    }

    #[test]
    fn test_admin_paths() {
        assert_eq!(admin_changelist_path("documents"), "/admin/documents/");
        assert_eq!(admin_add_path("documents"), "/admin/documents/add/");
        assert_eq!(admin_change_path("documents", 3), "/admin/documents/3/change/");
    }
}

use std::path::PathBuf;

pub fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

pub fn demos_root() -> PathBuf {
    workspace_root().join("demos")
}

pub fn demo_document_path(name: &str) -> PathBuf {
    demos_root().join(format!("{}.json", name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workspace_root_points_to_workspace() {
        assert!(workspace_root().join("Cargo.toml").exists());
    }

    #[test]
    fn demos_root_points_to_demos_directory() {
        assert!(demos_root().is_dir());
    }

    #[test]
    fn demo_document_path_appends_json_extension() {
        let path = demo_document_path("incendio");
        assert!(path.ends_with("incendio.json"));
        assert!(path.is_file());
    }
}

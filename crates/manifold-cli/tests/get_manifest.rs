//! Integration tests for `manifold get manifest`

use manifold_core::PackMetadata;
use manifold_kube::{FileDriver, StorageConfig, StorageDriver, StoredRelease};
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const SCENARIO: &str = "---\n# Source: myapp/templates/svc.yaml\nkind: Service\n---\n# Source: myapp/templates/deploy.yaml\nkind: Deployment\n";

/// Storage and working directories for one test
struct Workspace {
    storage: TempDir,
    cwd: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            storage: TempDir::new().unwrap(),
            cwd: TempDir::new().unwrap(),
        }
    }

    /// Store revisions 1..=n of `name`, one manifest per revision
    fn seed(&self, name: &str, manifests: &[&str]) {
        let driver = FileDriver::new(self.storage.path(), StorageConfig::default());
        let pack = PackMetadata::new("myapp", semver::Version::new(1, 0, 0));

        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        runtime.block_on(async {
            let mut previous: Option<StoredRelease> = None;
            for manifest in manifests {
                let release = match &previous {
                    Some(prev) => prev.next_revision(*manifest),
                    None => StoredRelease::deployed(name, "default", pack.clone(), *manifest),
                };
                driver.create(&release).await.unwrap();
                previous = Some(release);
            }
        });
    }

    fn manifold(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_manifold"))
            .args(args)
            .current_dir(self.cwd.path())
            .env("MANIFOLD_STORAGE_DIR", self.storage.path())
            .env_remove("MANIFOLD_NAMESPACE")
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to execute manifold")
    }

    fn out(&self) -> &Path {
        self.cwd.path()
    }

    fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.out().join(relative)).unwrap()
    }
}

mod get_manifest {
    use super::*;

    #[test]
    fn test_writes_one_file_per_template() {
        let ws = Workspace::new();
        ws.seed("myapp", &[SCENARIO]);

        let output = ws.manifold(&["get", "manifest", "myapp"]);

        assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
        assert!(output.stdout.is_empty());

        let svc = ws.read("myapp/templates/svc.yaml");
        assert!(svc.starts_with("---\n# Source: templates/svc.yaml\n"));
        assert!(svc.contains("kind: Service"));
        assert!(!svc.contains("Deployment"));

        let deploy = ws.read("myapp/templates/deploy.yaml");
        assert!(deploy.contains("kind: Deployment"));
    }

    #[test]
    fn test_manifest_without_sources_writes_nothing() {
        let ws = Workspace::new();
        ws.seed("myapp", &["kind: ConfigMap\n---\nkind: Secret\n"]);

        let output = ws.manifold(&["get", "manifest", "myapp"]);

        assert!(output.status.success());
        assert!(!ws.out().join("myapp").exists());
    }

    #[test]
    fn test_revision_selects_history_entry() {
        let ws = Workspace::new();
        ws.seed(
            "myapp",
            &[
                "---\n# Source: myapp/templates/v1.yaml\nkind: ConfigMap\n",
                "---\n# Source: myapp/templates/v2.yaml\nkind: ConfigMap\n",
            ],
        );

        let output = ws.manifold(&["get", "manifest", "myapp", "--revision", "1"]);
        assert!(output.status.success());
        assert!(ws.out().join("myapp/templates/v1.yaml").is_file());
        assert!(!ws.out().join("myapp/templates/v2.yaml").exists());
    }

    #[test]
    fn test_latest_revision_by_default() {
        let ws = Workspace::new();
        ws.seed(
            "myapp",
            &[
                "---\n# Source: myapp/templates/v1.yaml\nkind: ConfigMap\n",
                "---\n# Source: myapp/templates/v2.yaml\nkind: ConfigMap\n",
            ],
        );

        let output = ws.manifold(&["get", "manifest", "myapp"]);
        assert!(output.status.success());
        assert!(ws.out().join("myapp/templates/v2.yaml").is_file());
        assert!(!ws.out().join("myapp/templates/v1.yaml").exists());
    }

    #[test]
    fn test_show_only() {
        let ws = Workspace::new();
        ws.seed("myapp", &[SCENARIO]);

        let output = ws.manifold(&["get", "manifest", "myapp", "-s", "templates/svc.yaml"]);

        assert!(output.status.success());
        assert!(ws.out().join("myapp/templates/svc.yaml").is_file());
        assert!(!ws.out().join("myapp/templates/deploy.yaml").exists());
    }

    #[test]
    fn test_release_not_found() {
        let ws = Workspace::new();

        let output = ws.manifold(&["get", "manifest", "myapp"]);

        assert_eq!(output.status.code(), Some(6));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("release 'myapp' not found"), "stderr: {stderr}");
        assert!(!ws.out().join("myapp").exists());
    }

    #[test]
    fn test_missing_release_name_is_usage_error() {
        let ws = Workspace::new();
        ws.seed("myapp", &[SCENARIO]);

        let output = ws.manifold(&["get", "manifest"]);

        assert_eq!(output.status.code(), Some(64));
        assert!(!ws.out().join("myapp").exists());
    }

    #[test]
    fn test_two_release_names_is_usage_error() {
        let ws = Workspace::new();
        ws.seed("myapp", &[SCENARIO]);

        let output = ws.manifold(&["get", "manifest", "myapp", "other"]);

        assert_eq!(output.status.code(), Some(64));
        assert!(!ws.out().join("myapp").exists());
    }

    #[test]
    fn test_invalid_release_name() {
        let ws = Workspace::new();

        let output = ws.manifold(&["get", "manifest", "../escape"]);

        assert_eq!(output.status.code(), Some(2));
        assert!(String::from_utf8_lossy(&output.stderr).contains("invalid release name"));
    }

    #[test]
    fn test_namespace_outside_storage_rejected() {
        let ws = Workspace::new();
        ws.seed("myapp", &[SCENARIO]);

        let output = ws.manifold(&["get", "manifest", "myapp", "-n", "../.."]);

        assert_eq!(output.status.code(), Some(2));
        assert!(String::from_utf8_lossy(&output.stderr).contains("invalid namespace"));
        assert!(!ws.out().join("myapp").exists());
    }

    #[test]
    fn test_corrupt_latest_revision_fails() {
        let ws = Workspace::new();
        ws.seed(
            "myapp",
            &[
                "---\n# Source: myapp/templates/v1.yaml\nkind: ConfigMap\n",
                "---\n# Source: myapp/templates/v2.yaml\nkind: ConfigMap\n",
            ],
        );
        fs::write(ws.storage.path().join("default/myapp/v2.json"), b"garbage").unwrap();

        let output = ws.manifold(&["get", "manifest", "myapp"]);

        assert_eq!(output.status.code(), Some(6));
        assert!(!ws.out().join("myapp").exists());
    }

    #[test]
    fn test_namespace_flag() {
        let ws = Workspace::new();
        ws.seed("myapp", &[SCENARIO]);

        let output = ws.manifold(&["get", "manifest", "myapp", "-n", "staging"]);

        assert!(!output.status.success());
        assert!(String::from_utf8_lossy(&output.stderr).contains("staging"));
    }
}

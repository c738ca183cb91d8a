//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Validate the resource name
//! 2. Look up the template descriptor
//! 3. Resolve substitutions (defaults, framework check)
//! 4. Materialize into `<destination_root>/<name>`
//!
//! Steps 1-3 perform no I/O, so every input error surfaces before the
//! filesystem is touched.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateGenerator, TemplateStore},
        services::Materializer,
    },
    domain::{
        DomainValidator as validator, FsEntry, InitReport, InitRequest, MANIFEST_FILE,
        ScaffoldRequest, ScaffoldResult, Substitutions, manifest,
    },
    error::FxpResult,
};

/// Folders every resource is expected to have, created by `init` if absent.
const STANDARD_DIRS: [&str; 3] = ["client", "server", "shared"];

/// Main scaffolding service.
pub struct ScaffoldService {
    store: Arc<dyn TemplateStore>,
    filesystem: Arc<dyn Filesystem>,
    materializer: Materializer,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use std::sync::Arc;
    /// use fxp_core::application::{ScaffoldService, ports::*};
    ///
    /// # fn build(
    /// #     store: Arc<dyn TemplateStore>,
    /// #     filesystem: Arc<dyn Filesystem>,
    /// #     generator: Arc<dyn TemplateGenerator>,
    /// # ) -> ScaffoldService {
    /// ScaffoldService::new(store, filesystem, generator)
    /// # }
    /// ```
    pub fn new(
        store: Arc<dyn TemplateStore>,
        filesystem: Arc<dyn Filesystem>,
        generator: Arc<dyn TemplateGenerator>,
    ) -> Self {
        let materializer = Materializer::new(filesystem.clone(), generator);
        Self {
            store,
            filesystem,
            materializer,
        }
    }

    /// Enable on-disk templates found under `root`.
    pub fn with_templates_root(mut self, root: Option<PathBuf>) -> Self {
        self.materializer = self.materializer.with_templates_root(root);
        self
    }

    pub fn materializer(&self) -> &Materializer {
        &self.materializer
    }

    /// Create a new resource folder from a template.
    #[instrument(
        skip_all,
        fields(
            name = %request.name,
            template = %request.template_id,
            root = %request.destination_root.display()
        )
    )]
    pub fn scaffold(&self, request: &ScaffoldRequest) -> FxpResult<ScaffoldResult> {
        validator::validate_resource_name(&request.name)?;

        let descriptor = self.store.get(&request.template_id)?;
        let subs = Substitutions::resolve(&request.name, &descriptor, &request.options)?;
        debug!(framework = ?subs.framework, language = %subs.language, "substitutions resolved");

        let destination = request.destination();
        let source = self.materializer.materialize(&descriptor, &destination, &subs)?;

        info!(path = %destination.display(), source = source.label(), "resource created");
        Ok(ScaffoldResult::new(destination, &descriptor, &subs, &source))
    }

    /// Turn an existing folder into a resource.
    ///
    /// Writes the manifest (refusing to replace one unless `overwrite` is
    /// set) and adds any template files that are missing. Existing files
    /// other than the manifest are never touched.
    #[instrument(
        skip_all,
        fields(name = %request.name, directory = %request.directory.display())
    )]
    pub fn init_in_place(&self, request: &InitRequest) -> FxpResult<InitReport> {
        validator::validate_resource_name(&request.name)?;

        let descriptor = self.store.get(&request.template_id)?;
        let subs = Substitutions::resolve(&request.name, &descriptor, &request.options)?;
        let structure = self.materializer.generate(&descriptor, &subs)?;

        let dir = &request.directory;
        let manifest_path = dir.join(MANIFEST_FILE);
        if self.filesystem.exists(&manifest_path) && !request.overwrite {
            return Err(ApplicationError::ManifestExists {
                path: manifest_path,
            }
            .into());
        }

        self.filesystem.create_dir_all(dir)?;

        let manifest = structure
            .file(MANIFEST_FILE)
            .map(|f| f.content.clone())
            .unwrap_or_else(|| manifest::render(&subs.manifest_record()));
        self.filesystem.write_text(&manifest_path, &manifest)?;

        let mut report = InitReport::new(&manifest_path);

        for entry in structure.entries() {
            if entry.path() == std::path::Path::new(MANIFEST_FILE) {
                continue;
            }
            let path = dir.join(entry.path());
            if self.filesystem.exists(&path) {
                if matches!(entry, FsEntry::File(_)) {
                    report.skipped.push(entry.path().to_path_buf());
                }
                continue;
            }
            match entry {
                FsEntry::Directory(_) => self.filesystem.create_dir_all(&path)?,
                FsEntry::File(file) => {
                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }
                    self.filesystem.write_text(&path, &file.content)?;
                    report.created.push(entry.path().to_path_buf());
                }
            }
        }

        for folder in STANDARD_DIRS {
            let path = dir.join(folder);
            if !self.filesystem.exists(&path) {
                self.filesystem.create_dir_all(&path)?;
            }
        }

        info!(
            created = report.created.len(),
            skipped = report.skipped.len(),
            "resource initialized"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;
    use crate::domain::{
        DomainError, Framework, GeneratorId, ProjectStructure, ScaffoldOptions, TargetPlatform,
        TemplateDescriptor,
    };
    use crate::error::ErrorCategory;
    use std::collections::HashSet;
    use std::path::Path;
    use std::sync::Mutex;

    const TEMPLATES: &[TemplateDescriptor] = &[
        TemplateDescriptor {
            id: "basic-fivem",
            name: "Basic FiveM",
            description: "Simple FiveM resource",
            platform: TargetPlatform::FiveM,
            frameworks: &[Framework::Standalone],
            features: &[],
            generator: GeneratorId::Basic,
        },
        TemplateDescriptor {
            id: "esx-resource",
            name: "ESX Resource",
            description: "ESX framework resource",
            platform: TargetPlatform::FiveM,
            frameworks: &[Framework::Esx],
            features: &[],
            generator: GeneratorId::Esx,
        },
    ];

    struct FakeStore;

    impl TemplateStore for FakeStore {
        fn get(&self, id: &str) -> FxpResult<TemplateDescriptor> {
            TEMPLATES
                .iter()
                .find(|t| t.id == id)
                .copied()
                .ok_or_else(|| DomainError::UnknownTemplate { id: id.into() }.into())
        }

        fn list(&self, framework: Option<Framework>) -> FxpResult<Vec<TemplateDescriptor>> {
            Ok(TEMPLATES
                .iter()
                .filter(|t| framework.is_none_or(|f| t.supports(f)))
                .copied()
                .collect())
        }
    }

    struct FakeGenerator;

    impl TemplateGenerator for FakeGenerator {
        fn generate(
            &self,
            _generator: GeneratorId,
            _descriptor: &TemplateDescriptor,
            subs: &Substitutions,
        ) -> FxpResult<ProjectStructure> {
            Ok(ProjectStructure::new()
                .with_file(MANIFEST_FILE, format!("name '{}'", subs.resource_name))
                .with_file("client/main.lua", "-- client")
                .with_file("server/main.lua", "-- server"))
        }
    }

    fn service(fs: MockFilesystem) -> ScaffoldService {
        ScaffoldService::new(Arc::new(FakeStore), Arc::new(fs), Arc::new(FakeGenerator))
    }

    /// A mock that answers `exists` from `present` and records writes.
    fn tracking_fs(
        present: &[&str],
        writes: Arc<Mutex<Vec<(PathBuf, String)>>>,
    ) -> MockFilesystem {
        let present: HashSet<PathBuf> = present.iter().map(PathBuf::from).collect();
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(move |p| present.contains(p));
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_text().returning(move |p, content| {
            writes
                .lock()
                .unwrap()
                .push((p.to_path_buf(), content.to_string()));
            Ok(())
        });
        fs
    }

    #[test]
    fn invalid_name_touches_nothing() {
        // Any filesystem call would panic the expectation-free mock.
        let svc = service(MockFilesystem::new());
        let err = svc
            .scaffold(&ScaffoldRequest::new("123bad", "basic-fivem", "/res"))
            .unwrap_err();

        assert_eq!(err.category(), ErrorCategory::InvalidInput);
        assert!(err.to_string().contains("cannot start with a number"));
    }

    #[test]
    fn unknown_template_touches_nothing() {
        let svc = service(MockFilesystem::new());
        let err = svc
            .scaffold(&ScaffoldRequest::new("shop", "does-not-exist", "/res"))
            .unwrap_err();

        assert!(err.is_unknown_template());
    }

    #[test]
    fn unsupported_framework_is_invalid_input() {
        let svc = service(MockFilesystem::new());
        let request = ScaffoldRequest::new("shop", "esx-resource", "/res").with_options(
            ScaffoldOptions {
                framework: Some(Framework::QbCore),
                ..ScaffoldOptions::default()
            },
        );

        let err = svc.scaffold(&request).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn scaffold_writes_into_named_folder() {
        let writes = Arc::new(Mutex::new(Vec::new()));
        let svc = service(tracking_fs(&[], writes.clone()));

        let result = svc
            .scaffold(&ScaffoldRequest::new("my-shop", "esx-resource", "/res"))
            .unwrap();

        assert_eq!(result.path, PathBuf::from("/res/my-shop"));
        assert_eq!(result.template_id, "esx-resource");
        assert_eq!(result.framework, Some(Framework::Esx));
        assert_eq!(result.source, "procedural");

        let writes = writes.lock().unwrap();
        assert_eq!(writes.len(), 3);
        assert!(writes.contains(&(
            PathBuf::from("/res/my-shop/fxmanifest.lua"),
            "name 'my-shop'".to_string()
        )));
    }

    #[test]
    fn init_refuses_existing_manifest() {
        let writes = Arc::new(Mutex::new(Vec::new()));
        let svc = service(tracking_fs(&["/res/shop/fxmanifest.lua"], writes.clone()));

        let err = svc
            .init_in_place(&InitRequest::new("/res/shop", "shop"))
            .unwrap_err();

        assert_eq!(err.category(), ErrorCategory::Conflict);
        assert!(writes.lock().unwrap().is_empty());
    }

    #[test]
    fn init_overwrite_replaces_manifest_only() {
        let writes = Arc::new(Mutex::new(Vec::new()));
        let svc = service(tracking_fs(
            &["/res/shop/fxmanifest.lua", "/res/shop/client/main.lua"],
            writes.clone(),
        ));

        let mut request = InitRequest::new("/res/shop", "shop");
        request.overwrite = true;
        let report = svc.init_in_place(&request).unwrap();

        assert_eq!(report.manifest, PathBuf::from("/res/shop/fxmanifest.lua"));
        assert_eq!(report.created, vec![PathBuf::from("server/main.lua")]);
        assert_eq!(report.skipped, vec![PathBuf::from("client/main.lua")]);

        let written: Vec<_> = writes.lock().unwrap().iter().map(|(p, _)| p.clone()).collect();
        assert!(!written.iter().any(|p| p == Path::new("/res/shop/client/main.lua")));
        assert!(written.iter().any(|p| p == Path::new("/res/shop/fxmanifest.lua")));
    }

    #[test]
    fn init_validates_name_first() {
        let svc = service(MockFilesystem::new());
        let err = svc
            .init_in_place(&InitRequest::new("/res/x", "has space"))
            .unwrap_err();
        assert!(err.is_invalid_input());
    }
}

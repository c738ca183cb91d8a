//! End-to-end scaffolding against real adapters.

use std::path::Path;
use std::sync::Arc;

use fxp_adapters::{BuiltinStore, LocalFilesystem, MemoryFilesystem, ProceduralGenerator};
use fxp_core::{
    application::{Filesystem, ScaffoldService, TemplateService},
    domain::{Framework, InitRequest, ScaffoldOptions, ScaffoldRequest},
    error::ErrorCategory,
};
use tempfile::TempDir;

fn local_service() -> ScaffoldService {
    ScaffoldService::new(
        Arc::new(BuiltinStore::new()),
        Arc::new(LocalFilesystem::new()),
        Arc::new(ProceduralGenerator::new()),
    )
}

fn listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<_> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn creates_basic_resource() {
    let temp = TempDir::new().unwrap();
    let result = local_service()
        .scaffold(&ScaffoldRequest::new("my-shop", "basic-fivem", temp.path()))
        .unwrap();

    let root = temp.path().join("my-shop");
    assert_eq!(result.path, root);

    let manifest = std::fs::read_to_string(root.join("fxmanifest.lua")).unwrap();
    assert!(manifest.contains("my-shop"));
    assert!(manifest.contains("game 'gta5'"));
    assert!(!listing(&root.join("client")).is_empty());
    assert!(!listing(&root.join("server")).is_empty());
}

#[test]
fn invalid_name_leaves_destination_untouched() {
    let temp = TempDir::new().unwrap();
    let err = local_service()
        .scaffold(&ScaffoldRequest::new("123bad", "basic-fivem", temp.path()))
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::InvalidInput);
    assert!(listing(temp.path()).is_empty());
}

#[test]
fn second_scaffold_into_same_name_is_refused() {
    let temp = TempDir::new().unwrap();
    let service = local_service();
    let request = ScaffoldRequest::new("dup", "basic-fivem", temp.path());

    service.scaffold(&request).unwrap();
    let before = listing(&temp.path().join("dup"));

    let err = service.scaffold(&request).unwrap_err();
    assert!(err.is_destination_not_empty());
    assert_eq!(listing(&temp.path().join("dup")), before);
}

#[test]
fn unknown_template_creates_nothing() {
    let temp = TempDir::new().unwrap();
    let err = local_service()
        .scaffold(&ScaffoldRequest::new("shop", "vrp-basic", temp.path()))
        .unwrap_err();

    assert!(err.is_unknown_template());
    assert!(listing(temp.path()).is_empty());
}

#[test]
fn on_disk_template_substitutes_manifest_only() {
    let temp = TempDir::new().unwrap();
    let templates = temp.path().join("templates");
    let tree = templates.join("basic-fivem");
    std::fs::create_dir_all(tree.join("client")).unwrap();
    std::fs::write(
        tree.join("fxmanifest.lua"),
        "name '{{RESOURCE_NAME}}'\nauthor '{{AUTHOR}}'\ngame '{{GAME}}'\n",
    )
    .unwrap();
    std::fs::write(tree.join("client/main.lua"), "-- {{RESOURCE_NAME}} stays\n").unwrap();
    let logo: &[u8] = &[0x89, b'P', b'N', b'G', 0x00, 0xff];
    std::fs::write(tree.join("logo.png"), logo).unwrap();

    let out = temp.path().join("out");
    let request = ScaffoldRequest::new("shop", "basic-fivem", &out).with_options(ScaffoldOptions {
        author: Some("me".into()),
        ..Default::default()
    });
    let result = local_service()
        .with_templates_root(Some(templates))
        .scaffold(&request)
        .unwrap();

    assert_eq!(result.source, "on-disk");
    let root = out.join("shop");
    assert_eq!(
        std::fs::read_to_string(root.join("fxmanifest.lua")).unwrap(),
        "name 'shop'\nauthor 'me'\ngame 'gta5'\n"
    );
    assert_eq!(
        std::fs::read_to_string(root.join("client/main.lua")).unwrap(),
        "-- {{RESOURCE_NAME}} stays\n"
    );
    assert_eq!(std::fs::read(root.join("logo.png")).unwrap(), logo);
}

#[test]
fn on_disk_values_are_inserted_once_and_escaped() {
    let temp = TempDir::new().unwrap();
    let templates = temp.path().join("templates");
    let tree = templates.join("basic-fivem");
    std::fs::create_dir_all(&tree).unwrap();
    std::fs::write(
        tree.join("fxmanifest.lua"),
        "author '{{AUTHOR}}'\ndescription '{{DESCRIPTION}}'\n",
    )
    .unwrap();

    let out = temp.path().join("out");
    let request = ScaffoldRequest::new("shop", "basic-fivem", &out).with_options(ScaffoldOptions {
        author: Some("{{VERSION}} team".into()),
        description: Some("Tony's shop".into()),
        ..Default::default()
    });
    local_service()
        .with_templates_root(Some(templates))
        .scaffold(&request)
        .unwrap();

    assert_eq!(
        std::fs::read_to_string(out.join("shop/fxmanifest.lua")).unwrap(),
        "author '{{VERSION}} team'\ndescription 'Tony\\'s shop'\n"
    );
}

#[test]
fn scaffold_into_template_tree_is_refused() {
    let temp = TempDir::new().unwrap();
    let templates = temp.path().join("templates");
    let tree = templates.join("basic-fivem");
    std::fs::create_dir_all(&tree).unwrap();
    std::fs::write(tree.join("fxmanifest.lua"), "name '{{RESOURCE_NAME}}'\n").unwrap();

    let err = local_service()
        .with_templates_root(Some(templates))
        .scaffold(&ScaffoldRequest::new("inner", "basic-fivem", &tree))
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Conflict);
    assert_eq!(listing(&tree), vec!["fxmanifest.lua".to_string()]);
}

#[test]
fn framework_choice_flows_into_manifest() {
    let temp = TempDir::new().unwrap();
    let request = ScaffoldRequest::new("jobs", "qb-job", temp.path()).with_options(
        ScaffoldOptions {
            framework: Some(Framework::Qbox),
            ..Default::default()
        },
    );
    local_service().scaffold(&request).unwrap();

    let manifest = std::fs::read_to_string(temp.path().join("jobs/fxmanifest.lua")).unwrap();
    assert!(manifest.contains("'qbx_core'"));
}

#[test]
fn memory_filesystem_scaffold_and_init() {
    let fs = MemoryFilesystem::new();
    let service = ScaffoldService::new(
        Arc::new(BuiltinStore::new()),
        Arc::new(fs.clone()),
        Arc::new(ProceduralGenerator::new()),
    );

    service
        .scaffold(&ScaffoldRequest::new("panel", "ui-nui", "/res"))
        .unwrap();
    assert!(fs.read_file(Path::new("/res/panel/web/index.html")).is_some());

    fs.insert_file("/res/legacy/client/main.lua", "-- mine").unwrap();
    let report = service
        .init_in_place(&InitRequest::new("/res/legacy", "legacy"))
        .unwrap();

    assert!(report.skipped.contains(&"client/main.lua".into()));
    assert_eq!(
        fs.read_file(Path::new("/res/legacy/client/main.lua")).as_deref(),
        Some("-- mine")
    );
    assert!(fs.is_dir(Path::new("/res/legacy/shared")));
    assert!(fs.exists(Path::new("/res/legacy/fxmanifest.lua")));
}

#[test]
fn listing_and_lookup_agree() {
    let service = TemplateService::new(Arc::new(BuiltinStore::new()));
    let all = service.list(None).unwrap();
    assert_eq!(all.len(), 8);
    for info in &all {
        assert_eq!(service.get(&info.id).unwrap().id, info.id);
    }
    assert!(service.list(Some(Framework::Rsg)).unwrap().len() == 1);
}

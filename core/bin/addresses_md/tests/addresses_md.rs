use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::json;
use tempfile::TempDir;

use mgv_addresses_md::{generate_page, write_addresses_md, AddressesMdError, Args};
use mgv_config::AddressesConfig;
use mgv_deployments::{CollectError, InMemoryRecordReader};
use mgv_types::contract_names;

const TEMPLATE: &str = include_str!("../templates/contract-addresses-template.md");
const PREVIOUS_TEMPLATE: &str = include_str!("../templates/contract-previous-addresses-template.md");

/// Scratch folder with a deployments sub-folder and the two templates.
struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("deployments")).unwrap();
        fs::write(dir.path().join("template.md"), TEMPLATE).unwrap();
        fs::write(dir.path().join("previous.md"), PREVIOUS_TEMPLATE).unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn deploy(&self, contract: &str, suffix: &str, address: &str) {
        let artifact = json!({ "address": address, "abi": [] });
        let file = self
            .path("deployments")
            .join(format!("{}{}.json", contract, suffix));
        fs::write(file, artifact.to_string()).unwrap();
    }

    fn args(&self) -> Args {
        Args {
            deployment: self.path("deployments"),
            template: self.path("template.md"),
            template_previous: self.path("previous.md"),
            output: self.path("contract-addresses.md"),
            debug: false,
        }
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn writes_current_and_previous_sections() {
    let ws = Workspace::new();
    for contract in &["Mangrove", "MgvCleaner", "MgvReader", "MgvOracle"] {
        ws.deploy(contract, "", &format!("0x{}", contract));
    }
    ws.deploy("Mangrove", "-v1", "0x01");
    ws.deploy("MgvReader", "-v1", "0x02");
    ws.deploy("Mangrove", "-v2", "0x11");

    let args = ws.args();
    write_addresses_md(&args, &AddressesConfig::default()).unwrap();
    let page = read(&args.output);

    assert!(page.starts_with("# Contract addresses\n"));
    assert!(page.contains("| MgvOracle | `0xMgvOracle` |"));

    let v1 = page.find("### Version 1").unwrap();
    let v2 = page.find("### Version 2").unwrap();
    assert!(v1 < v2);
    assert!(!page.contains("### Version 3"));

    let v1_section = &page[v1..v2];
    assert!(v1_section.contains("| Mangrove | `0x01` |"));
    assert!(v1_section.contains("| MgvReader | `0x02` |"));
    assert!(v1_section.contains("| MgvCleaner | `none` |"));
    assert!(page[v2..].contains("| Mangrove | `0x11` |"));
    assert!(!page.contains("{{"));
}

#[test]
fn output_is_idempotent() {
    let ws = Workspace::new();
    ws.deploy("Mangrove", "", "0xCAFE");
    ws.deploy("Mangrove", "-v1", "0xBEEF");
    let args = ws.args();
    let config = AddressesConfig::default();

    write_addresses_md(&args, &config).unwrap();
    let first = fs::read(&args.output).unwrap();
    write_addresses_md(&args, &config).unwrap();
    let second = fs::read(&args.output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn empty_deployments_render_missing_markers() {
    let ws = Workspace::new();
    let args = ws.args();

    write_addresses_md(&args, &AddressesConfig::default()).unwrap();
    let page = read(&args.output);

    assert!(page.contains("| Mangrove | `none` |"));
    assert!(!page.contains("### Version"));
}

#[test]
fn existing_output_is_overwritten() {
    let ws = Workspace::new();
    ws.deploy("Mangrove", "", "0xCAFE");
    let args = ws.args();
    fs::write(&args.output, "stale content that is longer than nothing").unwrap();

    write_addresses_md(&args, &AddressesConfig::default()).unwrap();

    let page = read(&args.output);
    assert!(!page.contains("stale"));
    assert!(page.contains("`0xCAFE`"));
}

#[test]
fn unreadable_template_writes_nothing() {
    let ws = Workspace::new();
    let mut args = ws.args();
    args.template_previous = ws.path("missing.md");

    let err = write_addresses_md(&args, &AddressesConfig::default()).unwrap_err();

    assert!(
        matches!(err, AddressesMdError::TemplateRead { ref path, .. } if path == &ws.path("missing.md"))
    );
    assert!(!args.output.exists());
}

#[test]
fn malformed_record_writes_nothing() {
    let ws = Workspace::new();
    fs::write(ws.path("deployments").join("MgvReader-v1.json"), "not json").unwrap();
    let args = ws.args();

    let err = write_addresses_md(&args, &AddressesConfig::default()).unwrap_err();

    assert!(matches!(err, AddressesMdError::Collect(CollectError::Reader(_))));
    assert!(!args.output.exists());
}

#[test]
fn single_contract_page_from_memory() {
    let mut reader = InMemoryRecordReader::new();
    reader.insert("A", None, "0xCAFE");
    let config = AddressesConfig {
        contracts: contract_names(vec!["A"]),
        ..AddressesConfig::default()
    };

    let page = generate_page(&reader, &config, "{{ A }}", "never rendered").unwrap();

    assert_eq!(page, "0xCAFE");
}

#[test]
fn version_placeholder_is_left_in_current_section() {
    let reader = InMemoryRecordReader::new();
    let config = AddressesConfig {
        contracts: contract_names(vec!["A"]),
        version_var: "id".into(),
        ..AddressesConfig::default()
    };

    // `{{ id }}` is only known to the previous-addresses template.
    let page = generate_page(&reader, &config, "{{ A }} {{ id }}", "").unwrap();
    assert_eq!(page, "none {{ id }}");
}

#[test]
fn failed_output_write_leaves_no_partial_files() {
    let ws = Workspace::new();
    ws.deploy("Mangrove", "", "0xCAFE");
    let mut args = ws.args();
    // A non-empty directory cannot be replaced by the rendered page.
    args.output = ws.path("occupied");
    fs::create_dir(&args.output).unwrap();
    fs::write(args.output.join("keep.md"), "kept").unwrap();

    let err = write_addresses_md(&args, &AddressesConfig::default()).unwrap_err();

    assert!(
        matches!(err, AddressesMdError::OutputWrite { ref path, .. } if path == &ws.path("occupied"))
    );
    assert_eq!(read(&args.output.join("keep.md")), "kept");

    let mut entries: Vec<_> = fs::read_dir(ws.dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    entries.sort();
    assert_eq!(
        entries,
        vec!["deployments", "occupied", "previous.md", "template.md"]
    );
}

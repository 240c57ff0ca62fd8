use bartdeck_core::modules::{ParameterStore, WriteOutcome};
use std::collections::HashSet;
use std::fs;
use tempfile::TempDir;

fn read_lines(path: &std::path::Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap_or_else(|error| panic!("deck {} should be readable: {}", path.display(), error))
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn scalar_only_deck_has_one_line_per_unique_label() {
    let temp = TempDir::new().expect("tempdir should be created");
    let mut store = ParameterStore::new();
    store.set_spatial_dimension(2);
    store.set_transport_model("none");
    store.set_linear_solver("cg");
    store.set_preconditioner("amg");
    store.set_spatial_dimension(3);
    store.set_angular_quad_order(4);
    store.set_linear_solver("gmres");

    let outcome = store
        .write_to(temp.path(), "unique")
        .expect("write should succeed");
    let WriteOutcome::Single(path) = outcome else {
        panic!("scalar-only store should produce a single deck");
    };

    let lines = read_lines(&path);
    assert_eq!(
        lines,
        [
            "problem dimension = 3",
            "transport model = none",
            "ho linear solver name = gmres",
            "ho preconditioner name = amg",
            "angular quadrature order = 4",
        ]
    );
    let labels: HashSet<_> = lines
        .iter()
        .map(|line| line.split(" = ").next().expect("line should have a label"))
        .collect();
    assert_eq!(labels.len(), lines.len());
}

#[test]
fn every_sweep_deck_carries_all_scalars_then_the_sweep_line() {
    let temp = TempDir::new().expect("tempdir should be created");
    let mut store = ParameterStore::new();
    store.set_n_energy_groups(2);
    store.set_number_of_materials(vec![10, 20, 30]);
    store.set_mesh_filename("mesh.msh");

    store
        .write_to(temp.path(), "case")
        .expect("write should succeed");

    for (index, value) in ["10", "20", "30"].iter().enumerate() {
        let lines = read_lines(&temp.path().join(format!("inputs/case-{}.input", index)));
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "number of groups = 2");
        assert_eq!(lines[1], "mesh file name = mesh.msh");
        assert_eq!(lines[2], format!("number of materials = {}", value));
    }
}

#[test]
fn sweep_of_floats_and_text_uses_default_formatting() {
    let temp = TempDir::new().expect("tempdir should be created");
    let mut store = ParameterStore::new();
    store.set_bssor_factor(vec![1.0, 1.25]);

    let plan = store.render("relax");
    let contents: Vec<_> = plan.decks().iter().map(|deck| deck.content.as_str()).collect();
    assert_eq!(contents, ["ho ssor factor = 1.0\n", "ho ssor factor = 1.25\n"]);

    let mut store = ParameterStore::new();
    store.set_bssor_factor(vec!["low", "high"]);
    let outcome = store
        .write_to(temp.path(), "relax")
        .expect("write should succeed");
    assert_eq!(outcome.written_paths().len(), 2);
    assert_eq!(
        read_lines(&temp.path().join("inputs/relax-1.input")),
        ["ho ssor factor = high"]
    );
}

#[test]
fn writing_does_not_consume_the_store() {
    let temp = TempDir::new().expect("tempdir should be created");
    let mut store = ParameterStore::new();
    store.set_eigen_solver("pi");
    let before = store.clone();

    store.write_to(temp.path(), "keep").expect("write should succeed");
    assert_eq!(store, before);
}

//! Integration tests for the diagram catalog
//!
//! These verify the structural properties every catalog entry must
//! hold, plus the content invariants of a few specific diagrams.

use float_cmp::approx_eq;

use chainviz::{Renderer, catalog};
use chainviz_core::model::{Chip, Diagram, Element, FlowNode, NodeKind};

fn nodes_of(diagram: &Diagram) -> Vec<FlowNode> {
    let mut nodes = Vec::new();
    diagram.visit(&mut |element| {
        if let Element::Node(node) = element {
            nodes.push(node.clone());
        }
    });
    nodes
}

fn chips_of(diagram: &Diagram) -> Vec<Chip> {
    let mut chips = Vec::new();
    diagram.visit(&mut |element| {
        if let Element::Chip(chip) = element {
            chips.push(chip.clone());
        }
    });
    chips
}

fn btc_amount(line: &str) -> f64 {
    line.trim_end_matches(" BTC")
        .parse()
        .unwrap_or_else(|_| panic!("not a BTC amount: {line}"))
}

#[test]
fn test_catalog_is_complete() {
    assert_eq!(catalog::entries().len(), 20);
}

#[test]
fn test_every_entry_builds_a_non_empty_titled_diagram() {
    for entry in catalog::entries() {
        let diagram = (entry.build)();
        assert!(!diagram.title().is_empty(), "{}", entry.slug);
        assert!(!diagram.is_empty(), "{}", entry.slug);
    }
}

#[test]
fn test_every_entry_is_deterministic() {
    for entry in catalog::entries() {
        assert_eq!((entry.build)(), (entry.build)(), "{}", entry.slug);
    }
}

#[test]
fn test_no_element_has_an_empty_label() {
    for entry in catalog::entries() {
        let diagram = (entry.build)();
        diagram.visit(&mut |element| {
            match element {
                Element::Node(node) => {
                    assert!(!node.label().is_empty(), "{}", entry.slug);
                    assert!(node.lines().iter().all(|line| !line.is_empty()));
                }
                Element::Chip(chip) => assert!(!chip.text().is_empty(), "{}", entry.slug),
                Element::Label(label) => assert!(!label.text().is_empty(), "{}", entry.slug),
                Element::Panel(panel) => {
                    if let Some(title) = panel.panel_title() {
                        assert!(!title.is_empty(), "{}", entry.slug);
                    }
                }
                Element::Facts(facts) => {
                    for fact in facts.rows() {
                        assert!(!fact.key().is_empty(), "{}", entry.slug);
                        assert!(!fact.value().is_empty(), "{}", entry.slug);
                    }
                }
                Element::Arrow(_) | Element::Group(_) => {}
            }
            if let Some(tooltip) = element.tooltip() {
                assert!(!tooltip.heading().is_empty(), "{}", entry.slug);
            }
        });
    }
}

#[test]
fn test_every_entry_renders_to_html() {
    let renderer = Renderer::default();
    for entry in catalog::entries() {
        let diagram = (entry.build)();
        let html = renderer.render_html(&diagram).expect(entry.slug);
        assert!(html.contains("cv-diagram__title"), "{}", entry.slug);
    }
}

#[test]
fn test_every_entry_renders_to_json() {
    let renderer = Renderer::default();
    for entry in catalog::entries() {
        let diagram = (entry.build)();
        let json = renderer.render_json(&diagram).expect(entry.slug);
        assert!(json.contains(&format!("\"title\": \"{}\"", diagram.title())));
    }
}

#[test]
fn test_utxo_transaction_structure() {
    let diagram = catalog::bitcoin::utxo_transaction();
    let nodes = nodes_of(&diagram);

    let inputs: Vec<_> = nodes
        .iter()
        .filter(|node| node.kind() == NodeKind::Input)
        .collect();
    let outputs: Vec<_> = nodes
        .iter()
        .filter(|node| node.kind() == NodeKind::Output)
        .collect();
    let transfers: Vec<_> = nodes
        .iter()
        .filter(|node| node.kind() == NodeKind::Process)
        .collect();

    let input_labels: Vec<_> = inputs.iter().map(|node| node.label()).collect();
    assert_eq!(input_labels, ["UTXO #1", "UTXO #2"]);

    let output_labels: Vec<_> = outputs.iter().map(|node| node.label()).collect();
    assert_eq!(output_labels, ["To: Recipient", "Change"]);

    assert_eq!(transfers.len(), 1);
    assert_eq!(transfers[0].label(), "TX");

    let fee_chips: Vec<_> = chips_of(&diagram)
        .into_iter()
        .filter(|chip| chip.text().starts_with("Fee:"))
        .collect();
    assert_eq!(fee_chips.len(), 1);
    assert_eq!(fee_chips[0].text(), "Fee: 0.001 BTC");
}

#[test]
fn test_utxo_amounts_balance() {
    let diagram = catalog::bitcoin::utxo_transaction();
    let nodes = nodes_of(&diagram);

    let sum_of = |kind: NodeKind| -> f64 {
        nodes
            .iter()
            .filter(|node| node.kind() == kind)
            .map(|node| btc_amount(&node.lines()[0]))
            .sum()
    };

    let inputs = sum_of(NodeKind::Input);
    let outputs = sum_of(NodeKind::Output);
    let fee = 0.001;

    assert!(approx_eq!(f64, inputs, 0.8, epsilon = 1e-9));
    assert!(approx_eq!(f64, inputs, outputs + fee, epsilon = 1e-9));
}

#[test]
fn test_tendermint_round_has_four_ordered_phases() {
    let diagram = catalog::alt_l1::tendermint_round();
    let phases: Vec<_> = nodes_of(&diagram)
        .iter()
        .map(|node| node.label().to_string())
        .collect();

    assert_eq!(phases, ["PROPOSE", "PREVOTE", "PRECOMMIT", "COMMIT"]);

    let mut arrows = 0;
    diagram.visit(&mut |element| {
        if matches!(element, Element::Arrow(_)) {
            arrows += 1;
        }
    });
    assert_eq!(arrows, 3);
}

#[test]
fn test_zkevm_spectrum_has_five_ordered_rows() {
    let diagram = catalog::layer2::zkevm_types();
    let tiers: Vec<_> = chips_of(&diagram)
        .iter()
        .map(|chip| chip.text().to_string())
        .collect();

    assert_eq!(tiers, ["Type 1", "Type 2", "Type 2.5", "Type 3", "Type 4"]);
}

#[test]
fn test_registry_titles_match_built_diagrams() {
    // Slugs are kebab-case forms of the topic; the built diagram is the
    // source of truth for the display title. Spot-check a few pairs.
    let pairs = [
        ("utxo-transaction", "UTXO Transaction Model"),
        ("tendermint-round", "Tendermint Consensus Round"),
        ("zkevm-types", "zkEVM Type Spectrum"),
        ("hybrid-consensus", "BABE + GRANDPA Hybrid Consensus"),
    ];
    for (slug, title) in pairs {
        let entry = catalog::find(slug).expect(slug);
        assert_eq!((entry.build)().title(), title);
    }
}

//! Layer 2 diagrams: rollup architecture, rollup flavors, the
//! trilemma.

use chainviz_core::{
    color::Accent,
    model::{
        Arrow, ArrowDirection, Chip, Diagram, Fact, FactList, FlowNode, Group, Label, NodeKind,
        Panel, Tooltip,
    },
};

/// The two-layer rollup pipeline: sequencing on L2, settlement and
/// data availability on L1.
pub fn rollup_architecture() -> Diagram {
    let users = FlowNode::new(NodeKind::Input, Accent::Blue, "Users")
        .line("TXs")
        .tooltip(
            Tooltip::new("Users")
                .accent(Accent::Blue)
                .paragraph("Users submit transactions on L2. Faster and cheaper than on L1."),
        );

    let sequencer = Panel::new(Accent::Amber)
        .title("Sequencer")
        .child(Label::muted("order + execute"))
        .tooltip(
            Tooltip::new("Sequencer")
                .accent(Accent::Amber)
                .paragraph("A central operator (for now):")
                .bullet("Accepts transactions")
                .bullet("Orders them")
                .bullet("Executes off-chain")
                .bullet("Forms batches")
                .note("\u{26a0}\u{fe0f} Centralized, but CANNOT steal funds"),
        );

    let batch = FlowNode::new(NodeKind::Process, Accent::Green, "Batch")
        .line("compressed")
        .tooltip(
            Tooltip::new("Batch")
                .accent(Accent::Green)
                .paragraph("A compressed bundle of transactions published to L1.")
                .note("Contains: tx data + state root"),
        );

    let contract = Panel::new(Accent::Blue)
        .title("Rollup Contract")
        .child(Label::muted("verify + store"))
        .tooltip(
            Tooltip::new("Rollup Contract")
                .accent(Accent::Blue)
                .paragraph("Smart contract on L1:")
                .bullet("Accepts batches")
                .bullet("Stores state roots")
                .bullet("Handles withdrawals")
                .bullet("Verifies proofs (ZK) or fraud proofs (Optimistic)"),
        );

    let data_availability = FlowNode::new(NodeKind::Database, Accent::Purple, "DA")
        .line("blobs")
        .tooltip(
            Tooltip::new("Data Availability")
                .accent(Accent::Purple)
                .paragraph("Transaction data is published on L1:")
                .bullet("Calldata (before EIP-4844)")
                .bullet("Blobs (after EIP-4844)")
                .note("Lets anyone reconstruct the state"),
        );

    let layer2 = Panel::new(Accent::Purple).title("Layer 2").child(Group::row(vec![
        users.into(),
        Arrow::new(ArrowDirection::Right).into(),
        sequencer.into(),
        Arrow::new(ArrowDirection::Right).into(),
        batch.into(),
    ]));

    let layer1 = Panel::new(Accent::Blue)
        .title("Layer 1 (Ethereum)")
        .child(Group::row(vec![
            contract.into(),
            Arrow::new(ArrowDirection::Right).into(),
            data_availability.into(),
        ]));

    Diagram::new("Rollup Architecture")
        .push(layer2)
        .push(Arrow::new(ArrowDirection::Down))
        .push(layer1)
}

/// Side-by-side comparison of the two rollup proof systems.
pub fn optimistic_vs_zk() -> Diagram {
    let optimistic = Panel::new(Accent::Amber)
        .title("Optimistic")
        .child(
            FactList::new()
                .row(Fact::new("Validity", "Assumed"))
                .row(Fact::new("Proof", "Fraud proof"))
                .row(Fact::new("Finality", "7 days").accent(Accent::Amber))
                .row(Fact::new("EVM", "Native").accent(Accent::Green)),
        )
        .tooltip(
            Tooltip::new("Optimistic Rollup")
                .accent(Accent::Amber)
                .paragraph("Assumes validity, checks only when challenged:")
                .bullet("\u{2705} Simpler to build")
                .bullet("\u{2705} EVM compatibility")
                .bullet("\u{274c} 7-day withdrawal window")
                .bullet("\u{274c} Depends on fraud proofs")
                .note("Examples: Arbitrum, Optimism, Base"),
        );

    let zk = Panel::new(Accent::Purple)
        .title("ZK Rollup")
        .child(
            FactList::new()
                .row(Fact::new("Validity", "Proven"))
                .row(Fact::new("Proof", "ZK-SNARK/STARK"))
                .row(Fact::new("Finality", "Minutes").accent(Accent::Green))
                .row(Fact::new("EVM", "zkEVM").accent(Accent::Amber)),
        )
        .tooltip(
            Tooltip::new("ZK Rollup")
                .accent(Accent::Purple)
                .paragraph("Proves validity cryptographically:")
                .bullet("\u{2705} Fast withdrawal")
                .bullet("\u{2705} Mathematical guarantee")
                .bullet("\u{274c} Harder to build")
                .bullet("\u{274c} Expensive proof generation")
                .note("Examples: zkSync, Polygon zkEVM, Scroll"),
        );

    Diagram::new("Optimistic vs ZK Rollups")
        .push(Group::grid(2, vec![optimistic.into(), zk.into()]))
}

/// Vitalik's zkEVM classification, from full Ethereum equivalence to
/// language-level compatibility.
pub fn zkevm_types() -> Diagram {
    const TYPES: [(&str, &str, &str, &str, Accent); 5] = [
        (
            "Type 1",
            "Fully Ethereum-equivalent",
            "Proves Ethereum blocks exactly as they are; slowest proving",
            "Taiko",
            Accent::Blue,
        ),
        (
            "Type 2",
            "Fully EVM-equivalent",
            "Matches the EVM at the bytecode level; internal data structures may differ",
            "Linea, Scroll (goal)",
            Accent::Purple,
        ),
        (
            "Type 2.5",
            "EVM-equivalent except gas costs",
            "Reprices prover-hostile opcodes to keep proving practical",
            "Scroll today",
            Accent::Teal,
        ),
        (
            "Type 3",
            "Almost EVM-equivalent",
            "Drops a few opcodes and precompiles; most apps port unchanged",
            "Early Polygon zkEVM",
            Accent::Amber,
        ),
        (
            "Type 4",
            "High-level-language equivalent",
            "Compiles Solidity/Vyper source to a custom VM; fastest proving",
            "zkSync Era, Starknet",
            Accent::Rose,
        ),
    ];

    let rows = TYPES
        .iter()
        .map(|(tier, name, detail, examples, accent)| {
            Chip::new(*accent, *tier)
                .caption(*name)
                .tooltip(
                    Tooltip::new(format!("{tier}: {name}"))
                        .accent(*accent)
                        .paragraph(*detail)
                        .note(format!("Examples: {examples}")),
                )
                .into()
        })
        .collect();

    Diagram::new("zkEVM Type Spectrum")
        .push(Group::column(rows))
        .push(Label::muted(
            "Lower types inherit more of Ethereum; higher types prove faster",
        ))
}

/// The decentralization / security / scalability triangle with chain
/// placements.
pub fn blockchain_trilemma() -> Diagram {
    let corners = Group::row(vec![
        Chip::new(Accent::Blue, "Decentralization")
            .tooltip(
                Tooltip::new("Decentralization")
                    .accent(Accent::Blue)
                    .paragraph("Many independent validators."),
            )
            .into(),
        Chip::new(Accent::Green, "Security")
            .tooltip(
                Tooltip::new("Security")
                    .accent(Accent::Green)
                    .paragraph("Resistance to attacks."),
            )
            .into(),
        Chip::new(Accent::Amber, "Scalability")
            .tooltip(
                Tooltip::new("Scalability")
                    .accent(Accent::Amber)
                    .paragraph("High throughput."),
            )
            .into(),
    ]);

    let placements = Group::row(vec![
        Chip::new(Accent::Amber, "BTC")
            .caption("Decentralization + Security")
            .into(),
        Chip::new(Accent::Blue, "ETH")
            .caption("Decentralization + Security")
            .into(),
        Chip::new(Accent::Purple, "SOL")
            .caption("Security + Scalability")
            .into(),
        Chip::new(Accent::Green, "L2")
            .caption("Inherits L1 security")
            .into(),
    ]);

    let summary = Panel::new(Accent::Gray)
        .child(Label::muted(
            "No chain maximizes all three properties at once",
        ))
        .tooltip(
            Tooltip::new("Blockchain Trilemma")
                .paragraph("It is impossible to maximize all three properties at the same time:")
                .bullet("Decentralization: many independent validators")
                .bullet("Security: resistance to attacks")
                .bullet("Scalability: high throughput")
                .note("Layer 2 sidesteps the trilemma: it inherits security from L1"),
        );

    Diagram::new("Blockchain Trilemma")
        .push(corners)
        .push(placements)
        .push(summary)
}

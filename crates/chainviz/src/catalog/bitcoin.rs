//! Bitcoin diagrams: UTXO model, block structure, mining.

use chainviz_core::{
    color::Accent,
    model::{Arrow, ArrowDirection, Chip, Diagram, FlowNode, Group, Label, NodeKind, Panel, Tooltip},
};

/// The UTXO transaction model: two inputs consumed, two outputs
/// created, fee left for the miner.
///
/// The amounts balance: sum(inputs) = sum(outputs) + fee.
pub fn utxo_transaction() -> Diagram {
    const INPUTS: [(&str, f64); 2] = [("UTXO #1", 0.5), ("UTXO #2", 0.3)];
    const OUTPUTS: [(&str, f64, Accent); 2] = [
        ("To: Recipient", 0.7, Accent::Green),
        ("Change", 0.099, Accent::Purple),
    ];
    const FEE: f64 = 0.001;

    let input_tooltips = [
        Tooltip::new("UTXO (Unspent Transaction Output)")
            .accent(Accent::Blue)
            .paragraph(
                "An unspent output of a previous transaction. Each UTXO can be \
                 spent only once, and only as a whole.",
            )
            .note("Analogy: a banknote in a wallet; you cannot spend half a banknote"),
        Tooltip::new("Second Input")
            .accent(Accent::Blue)
            .paragraph(
                "A transaction can have several inputs, combining multiple UTXOs \
                 to reach the required amount.",
            ),
    ];
    let output_tooltips = [
        Tooltip::new("Payment Output")
            .accent(Accent::Green)
            .paragraph(
                "A new UTXO for the recipient, locked by a script that requires \
                 the recipient's signature to spend.",
            ),
        Tooltip::new("Change Output")
            .accent(Accent::Purple)
            .paragraph("Change returned to the sender as a new UTXO. 0.8 - 0.7 - 0.001 (fee) = 0.099 BTC"),
    ];

    let inputs = INPUTS
        .iter()
        .zip(input_tooltips)
        .map(|((label, amount), tooltip)| {
            FlowNode::new(NodeKind::Input, Accent::Blue, *label)
                .line(format!("{amount} BTC"))
                .tooltip(tooltip)
                .into()
        })
        .collect();

    let outputs = OUTPUTS
        .iter()
        .zip(output_tooltips)
        .map(|((label, amount, accent), tooltip)| {
            FlowNode::new(NodeKind::Output, *accent, *label)
                .line(format!("{amount} BTC"))
                .tooltip(tooltip)
                .into()
        })
        .collect();

    let transfer = FlowNode::new(NodeKind::Process, Accent::Amber, "TX")
        .line("Transfer")
        .tooltip(
            Tooltip::new("Transaction")
                .accent(Accent::Amber)
                .paragraph("A transaction consumes inputs (destroys UTXOs) and creates outputs (new UTXOs).")
                .note("Sum(inputs) = Sum(outputs) + fee"),
        );

    let fee = Chip::new(Accent::Rose, format!("Fee: {FEE} BTC")).tooltip(
        Tooltip::new("Transaction Fee")
            .accent(Accent::Rose)
            .paragraph("Fee = Sum(inputs) - Sum(outputs)")
            .paragraph("The miner collects the fee for including the transaction in a block."),
    );

    Diagram::new("UTXO Transaction Model")
        .push(Group::row(vec![
            Label::muted("Inputs").into(),
            Group::column(inputs).into(),
            Arrow::new(ArrowDirection::Right).into(),
            transfer.into(),
            Arrow::new(ArrowDirection::Right).into(),
            Group::column(outputs).into(),
            Label::muted("Outputs").into(),
        ]))
        .push(fee)
}

/// Bitcoin block anatomy: the 80-byte header above the transaction
/// merkle tree.
pub fn block_structure() -> Diagram {
    const HEADER_FIELDS: [&str; 6] = [
        "Version",
        "Prev Block Hash",
        "Merkle Root",
        "Timestamp",
        "Bits",
        "Nonce",
    ];

    let header = Panel::new(Accent::Blue)
        .title("Block Header")
        .child(Group::grid(
            3,
            HEADER_FIELDS
                .iter()
                .map(|field| Chip::new(Accent::Blue, *field).into())
                .collect(),
        ))
        .tooltip(
            Tooltip::new("Block Header (80 bytes)")
                .accent(Accent::Blue)
                .paragraph("Fixed-size header holding all of the block's metadata.")
                .bullet("Version: protocol version")
                .bullet("Previous Hash: link to the previous block")
                .bullet("Merkle Root: root of the transaction tree")
                .bullet("Timestamp: creation time")
                .bullet("Bits: current difficulty")
                .bullet("Nonce: for Proof of Work"),
        );

    let merkle = Panel::new(Accent::Green)
        .title("Merkle Tree")
        .child(Group::column(vec![
            Chip::new(Accent::Green, "Root Hash").into(),
            Group::row(vec![
                Chip::new(Accent::Green, "H12").into(),
                Chip::new(Accent::Green, "H34").into(),
            ])
            .into(),
            Group::row(vec![
                Chip::new(Accent::Green, "Tx1").into(),
                Chip::new(Accent::Green, "Tx2").into(),
                Chip::new(Accent::Green, "Tx3").into(),
                Chip::new(Accent::Green, "Tx4").into(),
            ])
            .into(),
        ]))
        .tooltip(
            Tooltip::new("Merkle Tree")
                .accent(Accent::Green)
                .paragraph(
                    "A binary tree of transaction hashes. Lets a client verify that \
                     a transaction is included without downloading the whole block.",
                )
                .note("Merkle Proof: O(log n) instead of O(n)"),
        );

    Diagram::new("Bitcoin Block Structure")
        .push(header)
        .push(Arrow::new(ArrowDirection::Down))
        .push(merkle)
}

/// Proof of Work mining: mempool to nonce grinding to a rewarded block.
pub fn pow_mining() -> Diagram {
    let mempool = FlowNode::new(NodeKind::Database, Accent::Purple, "Mempool")
        .line("Pending TXs")
        .tooltip(
            Tooltip::new("Mempool")
                .accent(Accent::Purple)
                .paragraph(
                    "Pool of unconfirmed transactions. Miners pick the \
                     transactions with the highest fee per byte.",
                ),
        );

    let mining = Panel::new(Accent::Amber)
        .title("Mining")
        .child(Label::muted("nonce++"))
        .child(Label::muted("hash < target?"))
        .tooltip(
            Tooltip::new("Mining (PoW)")
                .accent(Accent::Amber)
                .paragraph("The miner iterates the nonce until:")
                .code("SHA256(SHA256(header)) < target")
                .note("~10 minutes per block at current difficulty"),
        );

    let block = FlowNode::new(NodeKind::Output, Accent::Green, "Block")
        .line("Reward:")
        .line("3.125 BTC")
        .tooltip(
            Tooltip::new("Valid Block")
                .accent(Accent::Green)
                .paragraph("Once a valid nonce is found, the block is broadcast to the network.")
                .paragraph("Reward: block subsidy + transaction fees"),
        );

    Diagram::new("Proof of Work Mining").push(Group::row(vec![
        mempool.into(),
        Arrow::new(ArrowDirection::Right).into(),
        mining.into(),
        Arrow::new(ArrowDirection::Right).into(),
        block.into(),
    ]))
}

//! Ethereum diagrams: account model, EVM execution, gas.

use chainviz_core::{
    color::Accent,
    model::{
        Arrow, ArrowDirection, Chip, Diagram, Fact, FactList, FlowNode, Group, Label, NodeKind,
        Panel, Tooltip,
    },
};

/// The two Ethereum account types side by side.
pub fn account_model() -> Diagram {
    let eoa = Panel::new(Accent::Blue)
        .title("EOA")
        .child(
            FactList::new()
                .row(Fact::new("nonce", "42"))
                .row(Fact::new("balance", "1.5 ETH"))
                .row(Fact::new("code", "\u{2205}"))
                .row(Fact::new("storage", "\u{2205}")),
        )
        .tooltip(
            Tooltip::new("Externally Owned Account (EOA)")
                .accent(Accent::Blue)
                .paragraph("Controlled by a private key. Can initiate transactions.")
                .bullet("nonce: transaction counter")
                .bullet("balance: ETH balance")
                .bullet("codeHash: EMPTY")
                .bullet("storageRoot: EMPTY"),
        );

    let contract = Panel::new(Accent::Purple)
        .title("Contract")
        .child(
            FactList::new()
                .row(Fact::new("nonce", "1"))
                .row(Fact::new("balance", "0 ETH"))
                .row(Fact::new("code", "0x3f2b\u{2026}").accent(Accent::Purple))
                .row(Fact::new("storage", "0x8a9c\u{2026}").accent(Accent::Purple)),
        )
        .tooltip(
            Tooltip::new("Contract Account")
                .accent(Accent::Purple)
                .paragraph("Controlled by code. Cannot initiate transactions on its own.")
                .bullet("nonce: counter of contracts created")
                .bullet("balance: the contract's ETH balance")
                .bullet("codeHash: keccak256(bytecode)")
                .bullet("storageRoot: root of the storage trie"),
        );

    Diagram::new("Ethereum Account Model").push(Group::row(vec![eoa.into(), contract.into()]))
}

/// A transaction flowing through the EVM into state changes and a
/// receipt.
pub fn evm_execution() -> Diagram {
    let transaction = FlowNode::new(NodeKind::Input, Accent::Blue, "TX")
        .line("calldata")
        .tooltip(
            Tooltip::new("Transaction")
                .accent(Accent::Blue)
                .paragraph("Incoming transaction with calldata (encoded function call)."),
        );

    let evm = Panel::new(Accent::Amber)
        .title("EVM")
        .child(Chip::new(Accent::Amber, "Stack"))
        .child(Chip::new(Accent::Amber, "Memory"))
        .child(Chip::new(Accent::Amber, "Storage"))
        .tooltip(
            Tooltip::new("Ethereum Virtual Machine")
                .accent(Accent::Amber)
                .paragraph("Stack-based VM with 256-bit words. Every operation consumes gas.")
                .bullet("Stack: max 1024 elements")
                .bullet("Memory: byte-addressable")
                .bullet("Storage: persistent key-value"),
        );

    let state = FlowNode::new(NodeKind::Output, Accent::Green, "State")
        .line("changes")
        .tooltip(
            Tooltip::new("State Transition")
                .accent(Accent::Green)
                .paragraph("The result of execution:")
                .bullet("Changes to the World State")
                .bullet("Event logs (for indexing)")
                .bullet("Return data"),
        );

    let receipt = FlowNode::new(NodeKind::Database, Accent::Purple, "Receipt")
        .line("logs")
        .tooltip(
            Tooltip::new("Transaction Receipt")
                .accent(Accent::Purple)
                .paragraph("Proof of execution:")
                .bullet("status: success/revert")
                .bullet("gasUsed: actual gas spent")
                .bullet("logs: emitted events"),
        );

    Diagram::new("EVM Execution Model").push(Group::row(vec![
        transaction.into(),
        Arrow::new(ArrowDirection::Right).into(),
        evm.into(),
        Arrow::new(ArrowDirection::Right).into(),
        state.into(),
        Arrow::new(ArrowDirection::Right).into(),
        receipt.into(),
    ]))
}

/// The EIP-1559 fee split and a worked transfer example.
pub fn gas_model() -> Diagram {
    let base_fee = Panel::new(Accent::Rose)
        .title("Base Fee")
        .child(Label::new("~30 gwei"))
        .child(Label::muted("\u{1f525} Burned").accent(Accent::Rose))
        .tooltip(
            Tooltip::new("Base Fee")
                .accent(Accent::Rose)
                .paragraph("The minimum gas price, set by the protocol. It is BURNED.")
                .note("Moves up or down by \u{b1}12.5% depending on how full the block is"),
        );

    let priority_fee = Panel::new(Accent::Green)
        .title("Priority Fee")
        .child(Label::new("~2 gwei"))
        .child(Label::muted("\u{2192} Validator").accent(Accent::Green))
        .tooltip(
            Tooltip::new("Priority Fee (Tip)")
                .accent(Accent::Green)
                .paragraph("A tip for the validator. It rewards including the transaction.")
                .note("Higher tip = earlier inclusion"),
        );

    let total = Panel::new(Accent::Blue)
        .title("Total")
        .child(Label::new("~32 gwei"))
        .child(Label::muted("per gas unit"))
        .tooltip(
            Tooltip::new("Total Fee")
                .accent(Accent::Blue)
                .paragraph("The full transaction cost:")
                .code("gas_used \u{d7} (base_fee + priority_fee)"),
        );

    let example = Chip::new(Accent::Gray, "Simple transfer: 21,000 gas \u{d7} 32 gwei = 0.000672 ETH")
        .tooltip(
            Tooltip::new("Worked example")
                .paragraph("For a plain ETH transfer (21,000 gas):")
                .code("21,000 \u{d7} 32 gwei = 672,000 gwei = 0.000672 ETH")
                .note("\u{2248} $1.50 at ETH = $2,500"),
        );

    Diagram::new("EIP-1559 Gas Model")
        .push(Group::row(vec![
            base_fee.into(),
            Label::strong("+").into(),
            priority_fee.into(),
            Label::strong("=").into(),
            total.into(),
        ]))
        .push(example)
}

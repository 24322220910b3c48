//! Alternative L1 diagrams: Solana, Cosmos, Polkadot architectures and
//! their consensus designs.

use chainviz_core::{
    color::Accent,
    model::{
        Arrow, ArrowDirection, Chip, Diagram, Element, FlowNode, Group, Label, NodeKind, Panel,
        Tooltip,
    },
};

/// Four flavors of Proof of Stake side by side.
pub fn pos_variants() -> Diagram {
    const VARIANTS: [(&str, Accent, [&str; 3]); 4] = [
        (
            "Ethereum (Gasper)",
            Accent::Blue,
            [
                "Casper FFG + LMD-GHOST",
                "12 sec blocks, 13 min finality",
                "800K+ validators",
            ],
        ),
        (
            "Tendermint (Cosmos)",
            Accent::Purple,
            [
                "BFT-based, 2/3 majority",
                "Instant finality (1-6 sec)",
                "Limited validators (21-180)",
            ],
        ),
        (
            "PoH (Solana)",
            Accent::Green,
            [
                "VDF-based timestamping + Tower BFT",
                "400ms block time",
                "Requires specialized hardware",
            ],
        ),
        (
            "GRANDPA + BABE (Polkadot)",
            Accent::Rose,
            [
                "Hybrid: probabilistic + deterministic",
                "BABE production, GRANDPA finality",
                "12 sec target",
            ],
        ),
    ];

    let cells = VARIANTS
        .iter()
        .map(|(name, accent, details)| {
            let mut tooltip = Tooltip::new(*name);
            let mut panel = Panel::new(*accent).title(*name);
            for detail in details {
                tooltip = tooltip.bullet(*detail);
                panel = panel.child(Label::muted(*detail));
            }
            panel.tooltip(tooltip).into()
        })
        .collect();

    Diagram::new("PoS Consensus Variants").push(Group::grid(2, cells))
}

/// One Tendermint consensus round: four phases to an instantly final
/// block.
pub fn tendermint_round() -> Diagram {
    const PHASES: [(&str, Accent, &str); 4] = [
        (
            "PROPOSE",
            Accent::Blue,
            "The round's proposer broadcasts a candidate block to all validators.",
        ),
        (
            "PREVOTE",
            Accent::Purple,
            "Validators vote on the proposal; 2/3 matching prevotes form a polka.",
        ),
        (
            "PRECOMMIT",
            Accent::Amber,
            "After seeing a polka, validators lock on the block and precommit to it.",
        ),
        (
            "COMMIT",
            Accent::Green,
            "2/3 precommits commit the block. Finality is instant; no reorgs.",
        ),
    ];

    let mut children: Vec<Element> = Vec::new();
    for (index, (phase, accent, detail)) in PHASES.iter().enumerate() {
        if index > 0 {
            children.push(Arrow::new(ArrowDirection::Right).into());
        }
        children.push(
            FlowNode::new(NodeKind::Process, *accent, *phase)
                .line(format!("step {}", index + 1))
                .tooltip(Tooltip::new(*phase).accent(*accent).paragraph(*detail))
                .into(),
        );
    }

    Diagram::new("Tendermint Consensus Round")
        .push(Group::row(children))
        .push(Label::muted(
            "If a round fails, the next proposer starts a new round for the same height",
        ))
}

/// Validator counts and stake concentration across networks.
pub fn validator_concentration() -> Diagram {
    const CHAINS: [(&str, &str, &[&str], &str); 3] = [
        (
            "Ethereum",
            "800K validators",
            &["Lido: 29%", "Coinbase: 9%", "Kraken: 3%"],
            "~3",
        ),
        (
            "Solana",
            "~2K validators",
            &["Helius: 5%", "Jump: 4%", "Figment: 3%"],
            "~20",
        ),
        ("Cosmos Hub", "~180 validators", &["Top 10: ~35%"], "~7"),
    ];

    let cells = CHAINS
        .iter()
        .map(|(name, validators, top, nakamoto)| {
            let mut panel = Panel::new(Accent::Gray).title(*name);
            for entry in *top {
                panel = panel.child(Label::muted(*entry));
            }
            panel
                .child(Label::new(*validators).accent(Accent::Amber))
                .tooltip(
                    Tooltip::new(*name)
                        .paragraph(format!("Nakamoto coefficient: {nakamoto}"))
                        .note("(nodes to halt network)"),
                )
                .into()
        })
        .collect();

    Diagram::new("Validator Concentration")
        .accent(Accent::Amber)
        .push(Group::grid(3, cells))
}

/// The eight performance innovations Solana stacks together.
pub fn solana_innovations() -> Diagram {
    const INNOVATIONS: [(&str, &str); 8] = [
        ("Proof of History", "Verifiable delay function"),
        ("Tower BFT", "PoH-optimized consensus"),
        ("Turbine", "Block propagation protocol"),
        ("Gulf Stream", "Mempool-less tx forwarding"),
        ("Sealevel", "Parallel smart contracts"),
        ("Pipelining", "Validation optimization"),
        ("Cloudbreak", "Horizontal state scaling"),
        ("Archivers", "Distributed ledger storage"),
    ];

    let cells = INNOVATIONS
        .iter()
        .enumerate()
        .map(|(index, (name, detail))| {
            Chip::new(Accent::Green, *name)
                .caption(*detail)
                .tooltip(
                    Tooltip::new(format!("{}. {name}", index + 1)).paragraph(*detail),
                )
                .into()
        })
        .collect();

    Diagram::new("Solana's 8 Innovations")
        .accent(Accent::Green)
        .push(Group::grid(2, cells))
}

/// Solana's ownership rule: only the owning program may modify an
/// account.
pub fn solana_account_ownership() -> Diagram {
    const ACCOUNTS: [(&str, &str, &str, Accent); 3] = [
        (
            "System Program",
            "User Wallet",
            "lamports: 1B, data: []",
            Accent::Blue,
        ),
        (
            "Token Program",
            "Token Account",
            "mint, owner, amount...",
            Accent::Purple,
        ),
        ("Custom Program", "PDA Account", "custom_state", Accent::Green),
    ];

    let rows = ACCOUNTS
        .iter()
        .map(|(owner, account, data, accent)| {
            Panel::new(*accent)
                .title(*owner)
                .child(Group::row(vec![
                    Arrow::new(ArrowDirection::Right).into(),
                    Chip::new(Accent::Gray, *account).caption(*data).into(),
                ]))
                .tooltip(
                    Tooltip::new(*owner)
                        .accent(*accent)
                        .paragraph(format!("Owns: {account}"))
                        .note("Only owner can modify account data"),
                )
                .into()
        })
        .collect();

    Diagram::new("Solana Account Ownership")
        .accent(Accent::Purple)
        .push(Group::column(rows))
}

/// Shared-execution Ethereum against Cosmos app-chains.
pub fn monolithic_vs_appchains() -> Diagram {
    const ETH_APPS: [&str; 4] = ["Uniswap", "Aave", "OpenSea", "Compound"];
    const COSMOS_CHAINS: [&str; 3] = ["Osmosis", "dYdX", "Stride"];

    let ethereum = Panel::new(Accent::Blue)
        .title("Ethereum")
        .child(Group::row(
            ETH_APPS
                .iter()
                .map(|app| Chip::new(Accent::Blue, *app).into())
                .collect(),
        ))
        .child(Label::muted("All share same layer"))
        .tooltip(
            Tooltip::new("Monolithic (Ethereum)")
                .accent(Accent::Blue)
                .paragraph("All apps share same execution layer, compete for block space"),
        );

    let cosmos = Panel::new(Accent::Purple)
        .title("Cosmos")
        .child(Group::row(
            COSMOS_CHAINS
                .iter()
                .map(|chain| Chip::new(Accent::Purple, *chain).into())
                .collect(),
        ))
        .child(Label::muted("\u{2193} IBC \u{2193}").accent(Accent::Purple))
        .child(Chip::new(Accent::Purple, "Cosmos Hub"))
        .tooltip(
            Tooltip::new("App-Chains (Cosmos)")
                .accent(Accent::Purple)
                .paragraph("Each app has its own chain, connected via IBC"),
        );

    Diagram::new("Monolithic vs App-Chains")
        .push(Group::grid(2, vec![ethereum.into(), cosmos.into()]))
}

/// The Cosmos SDK module stack down to Tendermint Core.
pub fn cosmos_sdk_stack() -> Diagram {
    const CORE_MODULES: [&str; 4] = ["Auth", "Bank", "Staking", "Gov"];
    const EXTRA_MODULES: [&str; 4] = ["IBC", "Custom 1", "Custom 2", "\u{2026}"];

    let core_row = Group::grid(
        4,
        CORE_MODULES
            .iter()
            .map(|module| {
                Chip::new(Accent::Purple, *module)
                    .tooltip(Tooltip::new(format!("{module} Module")))
                    .into()
            })
            .collect(),
    );

    let extra_row = Group::grid(
        4,
        EXTRA_MODULES
            .iter()
            .map(|module| Chip::new(Accent::Purple, *module).into())
            .collect(),
    );

    let tendermint = Panel::new(Accent::Blue)
        .title("Tendermint Core")
        .child(Label::muted("Consensus + Networking"));

    Diagram::new("Cosmos SDK Architecture")
        .accent(Accent::Purple)
        .push(Group::column(vec![
            core_row.into(),
            extra_row.into(),
            Chip::new(Accent::Amber, "BaseApp (ABCI)").into(),
            tendermint.into(),
        ]))
}

/// The four layers of the IBC protocol.
pub fn ibc_components() -> Diagram {
    const COMPONENTS: [(&str, &str); 4] = [
        ("Light Clients", "Track consensus state of connected chains"),
        ("Connections", "Authenticated links via handshake"),
        ("Channels", "Application-level communication paths"),
        ("Packets", "Actual data with timeout mechanism"),
    ];

    let rows = COMPONENTS
        .iter()
        .map(|(name, detail)| {
            Chip::new(Accent::Green, *name)
                .caption(*detail)
                .tooltip(Tooltip::new(*name).paragraph(*detail))
                .into()
        })
        .collect();

    Diagram::new("IBC Protocol Components")
        .accent(Accent::Green)
        .push(Group::column(rows))
}

/// The relay chain with a sample of parachains beneath it.
pub fn polkadot_network() -> Diagram {
    const PARACHAINS: [(&str, &str); 4] = [
        ("Acala", "DeFi"),
        ("Moonbeam", "EVM"),
        ("Astar", "dApps"),
        ("Phala", "Privacy"),
    ];

    let relay = Panel::new(Accent::Rose)
        .title("Relay Chain")
        .child(Label::muted("(DOT staking, consensus)"))
        .tooltip(
            Tooltip::new("Relay Chain")
                .accent(Accent::Rose)
                .paragraph("DOT staking, consensus, cross-chain coordination")
                .note("Does NOT execute smart contracts"),
        );

    let parachains = Group::row(
        PARACHAINS
            .iter()
            .map(|(name, kind)| {
                Chip::new(Accent::Rose, *name)
                    .caption(*kind)
                    .tooltip(Tooltip::new(*name).paragraph(format!("Parachain: {kind}")))
                    .into()
            })
            .collect(),
    );

    Diagram::new("Polkadot Network")
        .accent(Accent::Rose)
        .push(Group::column(vec![relay.into(), parachains.into()]))
}

/// Polkadot's split of block production and finality.
pub fn hybrid_consensus() -> Diagram {
    let babe = Panel::new(Accent::Amber)
        .title("BABE")
        .child(Label::muted("Block Production"))
        .child(Label::new("\u{2022} VRF slot selection"))
        .child(Label::new("\u{2022} 6 sec blocks"))
        .child(Label::new("\u{2022} Can fork"))
        .tooltip(
            Tooltip::new("BABE (Block Production)")
                .accent(Accent::Amber)
                .bullet("VRF-based slot leader selection")
                .bullet("Produces blocks every 6 seconds")
                .bullet("Probabilistic (can have forks)"),
        );

    let grandpa = Panel::new(Accent::Purple)
        .title("GRANDPA")
        .child(Label::muted("Finality"))
        .child(Label::new("\u{2022} Finalizes chains"))
        .child(Label::new("\u{2022} No reorgs after"))
        .child(Label::new("\u{2022} Partition tolerant"))
        .tooltip(
            Tooltip::new("GRANDPA (Finality)")
                .accent(Accent::Purple)
                .bullet("Finalizes chains of blocks at once")
                .bullet("Deterministic finality (no reorgs)")
                .bullet("Works during partitions"),
        );

    Diagram::new("BABE + GRANDPA Hybrid Consensus")
        .accent(Accent::Blue)
        .push(Group::grid(2, vec![babe.into(), grandpa.into()]))
        .push(Label::muted("Together: Fast production + Strong finality"))
}

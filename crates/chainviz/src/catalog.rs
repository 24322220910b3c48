//! The diagram catalog.
//!
//! One builder function per course topic, grouped by course section.
//! Every function takes no input, has no side effects, and always
//! returns the same tree; all content is embedded as literal data.
//!
//! The [`entries`] registry is the single aggregation point consumers
//! go through: it maps a stable slug to the builder function and the
//! course section it belongs to.

pub mod alt_l1;
pub mod bitcoin;
pub mod ethereum;
pub mod layer2;

use chainviz_core::model::Diagram;

/// One registry row: a stable slug, the course section, and the
/// builder function.
#[derive(Clone, Copy)]
pub struct CatalogEntry {
    /// Stable identifier used by the CLI and host-site embeds.
    pub slug: &'static str,
    /// Course section the diagram belongs to.
    pub section: &'static str,
    /// The diagram builder.
    pub build: fn() -> Diagram,
}

/// Every diagram in the catalog, in course order.
pub fn entries() -> &'static [CatalogEntry] {
    const ENTRIES: &[CatalogEntry] = &[
        CatalogEntry {
            slug: "utxo-transaction",
            section: "bitcoin",
            build: bitcoin::utxo_transaction,
        },
        CatalogEntry {
            slug: "block-structure",
            section: "bitcoin",
            build: bitcoin::block_structure,
        },
        CatalogEntry {
            slug: "pow-mining",
            section: "bitcoin",
            build: bitcoin::pow_mining,
        },
        CatalogEntry {
            slug: "account-model",
            section: "ethereum",
            build: ethereum::account_model,
        },
        CatalogEntry {
            slug: "evm-execution",
            section: "ethereum",
            build: ethereum::evm_execution,
        },
        CatalogEntry {
            slug: "gas-model",
            section: "ethereum",
            build: ethereum::gas_model,
        },
        CatalogEntry {
            slug: "rollup-architecture",
            section: "layer2",
            build: layer2::rollup_architecture,
        },
        CatalogEntry {
            slug: "optimistic-vs-zk",
            section: "layer2",
            build: layer2::optimistic_vs_zk,
        },
        CatalogEntry {
            slug: "zkevm-types",
            section: "layer2",
            build: layer2::zkevm_types,
        },
        CatalogEntry {
            slug: "blockchain-trilemma",
            section: "layer2",
            build: layer2::blockchain_trilemma,
        },
        CatalogEntry {
            slug: "pos-variants",
            section: "alt-l1",
            build: alt_l1::pos_variants,
        },
        CatalogEntry {
            slug: "tendermint-round",
            section: "alt-l1",
            build: alt_l1::tendermint_round,
        },
        CatalogEntry {
            slug: "validator-concentration",
            section: "alt-l1",
            build: alt_l1::validator_concentration,
        },
        CatalogEntry {
            slug: "solana-innovations",
            section: "alt-l1",
            build: alt_l1::solana_innovations,
        },
        CatalogEntry {
            slug: "solana-account-ownership",
            section: "alt-l1",
            build: alt_l1::solana_account_ownership,
        },
        CatalogEntry {
            slug: "monolithic-vs-appchains",
            section: "alt-l1",
            build: alt_l1::monolithic_vs_appchains,
        },
        CatalogEntry {
            slug: "cosmos-sdk-stack",
            section: "alt-l1",
            build: alt_l1::cosmos_sdk_stack,
        },
        CatalogEntry {
            slug: "ibc-components",
            section: "alt-l1",
            build: alt_l1::ibc_components,
        },
        CatalogEntry {
            slug: "polkadot-network",
            section: "alt-l1",
            build: alt_l1::polkadot_network,
        },
        CatalogEntry {
            slug: "hybrid-consensus",
            section: "alt-l1",
            build: alt_l1::hybrid_consensus,
        },
    ];
    ENTRIES
}

/// Looks up a catalog entry by slug.
pub fn find(slug: &str) -> Option<&'static CatalogEntry> {
    entries().iter().find(|entry| entry.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugs_are_unique() {
        let mut slugs: Vec<_> = entries().iter().map(|entry| entry.slug).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), entries().len());
    }

    #[test]
    fn test_find_known_and_unknown() {
        assert!(find("utxo-transaction").is_some());
        assert!(find("no-such-diagram").is_none());
    }

    #[test]
    fn test_every_section_is_known() {
        let sections = ["bitcoin", "ethereum", "layer2", "alt-l1"];
        for entry in entries() {
            assert!(sections.contains(&entry.section), "{}", entry.slug);
        }
    }
}

//! Solana Explorer link helpers.
//!
//! The cluster is sniffed from the RPC endpoint URL so that printed
//! transaction links land on the right network view.

/// Which explorer cluster a transaction link should target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cluster {
    Devnet,
    Mainnet,
    Custom,
}

impl Cluster {
    /// Guess the cluster from an RPC endpoint URL.
    pub fn from_endpoint(endpoint: &str) -> Self {
        if endpoint.contains("devnet") {
            Cluster::Devnet
        } else if endpoint.contains("mainnet") {
            Cluster::Mainnet
        } else {
            Cluster::Custom
        }
    }

    /// Query-string suffix for explorer URLs; empty on mainnet.
    fn query_suffix(self) -> &'static str {
        match self {
            Cluster::Devnet => "?cluster=devnet",
            Cluster::Mainnet => "",
            Cluster::Custom => "?cluster=custom",
        }
    }
}

/// Explorer URL for a transaction signature (base58 form).
pub fn tx_url(signature: &str, cluster: Cluster) -> String {
    format!(
        "https://explorer.solana.com/tx/{signature}{}",
        cluster.query_suffix()
    )
}

/// Explorer URL for an account address.
pub fn address_url(address: &str, cluster: Cluster) -> String {
    format!(
        "https://explorer.solana.com/address/{address}{}",
        cluster.query_suffix()
    )
}

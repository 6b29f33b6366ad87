//! Production [`LedgerClient`] over `solana-client` + `mpl-core`.
//!
//! Every mutating call builds one Metaplex Core instruction, signs it
//! with the payer (plus the freshly generated account keypair for
//! creates), and blocks on `send_and_confirm_transaction`. Fetches read
//! the raw account and decode it with the `mpl-core` account types.

use async_trait::async_trait;
use mpl_core::instructions::{
    AddPluginV1Builder, CreateCollectionV2Builder, CreateV2Builder, UpdatePluginV1Builder,
};
use mpl_core::types::{FreezeDelegate, Plugin, UpdateAuthority};
use mpl_core::{Asset, Collection};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature};
use solana_sdk::signer::Signer;
use solana_sdk::transaction::Transaction;

use crate::ledger::{
    AssetView, ClientError, CollectionView, CreatedAccount, LedgerClient, UpdateAuthorityKind,
};

/// [`LedgerClient`] implementation bound to one RPC endpoint and one
/// signing identity.
pub struct RpcLedgerClient {
    rpc: RpcClient,
    payer: Keypair,
}

impl RpcLedgerClient {
    /// Create a client with confirmed commitment, matching the
    /// send-and-confirm semantics the workflows rely on.
    pub fn new(endpoint: impl Into<String>, payer: Keypair) -> Self {
        Self {
            rpc: RpcClient::new_with_commitment(endpoint.into(), CommitmentConfig::confirmed()),
            payer,
        }
    }

    /// Sign and send one instruction, blocking until confirmation.
    ///
    /// `extra_signer` is the generated account keypair for create calls;
    /// the payer always signs.
    async fn send_instruction(
        &self,
        instruction: Instruction,
        extra_signer: Option<&Keypair>,
    ) -> Result<Signature, ClientError> {
        let blockhash = self
            .rpc
            .get_latest_blockhash()
            .await
            .map_err(|e| ClientError::Rpc(Box::new(e)))?;

        let transaction = {
            let mut signers: Vec<&dyn Signer> = vec![&self.payer];
            if let Some(signer) = extra_signer {
                signers.push(signer);
            }

            Transaction::new_signed_with_payer(
                &[instruction],
                Some(&self.payer.pubkey()),
                &signers,
                blockhash,
            )
        };

        self.rpc
            .send_and_confirm_transaction(&transaction)
            .await
            .map_err(|e| ClientError::Rpc(Box::new(e)))
    }

    /// Fetch raw account data, mapping a missing account to
    /// [`ClientError::AccountNotFound`].
    async fn account_data(&self, address: &Pubkey) -> Result<Vec<u8>, ClientError> {
        match self.rpc.get_account(address).await {
            Ok(account) => Ok(account.data),
            Err(e) if e.to_string().contains("AccountNotFound") => {
                Err(ClientError::AccountNotFound { address: *address })
            }
            Err(e) => Err(ClientError::Rpc(Box::new(e))),
        }
    }
}

#[async_trait]
impl LedgerClient for RpcLedgerClient {
    fn payer(&self) -> Pubkey {
        self.payer.pubkey()
    }

    async fn balance(&self) -> Result<u64, ClientError> {
        self.rpc
            .get_balance(&self.payer.pubkey())
            .await
            .map_err(|e| ClientError::Rpc(Box::new(e)))
    }

    async fn create_collection(
        &self,
        name: &str,
        uri: &str,
    ) -> Result<CreatedAccount, ClientError> {
        let collection = Keypair::new();

        let instruction = CreateCollectionV2Builder::new()
            .collection(collection.pubkey())
            .payer(self.payer.pubkey())
            .update_authority(Some(self.payer.pubkey()))
            .name(name.to_string())
            .uri(uri.to_string())
            .instruction();

        let signature = self.send_instruction(instruction, Some(&collection)).await?;
        tracing::info!(
            collection = %collection.pubkey(),
            %signature,
            "Collection created",
        );

        Ok(CreatedAccount {
            address: collection.pubkey(),
            signature,
        })
    }

    async fn fetch_collection(&self, address: &Pubkey) -> Result<CollectionView, ClientError> {
        let data = self.account_data(address).await?;
        let collection =
            Collection::from_bytes(&data).map_err(|source| ClientError::Deserialize {
                kind: "collection",
                address: *address,
                source,
            })?;

        Ok(CollectionView {
            address: *address,
            name: collection.base.name,
            uri: collection.base.uri,
            num_minted: collection.base.num_minted,
        })
    }

    async fn create_asset(
        &self,
        collection: &CollectionView,
        name: &str,
        uri: &str,
    ) -> Result<CreatedAccount, ClientError> {
        let asset = Keypair::new();

        let instruction = CreateV2Builder::new()
            .asset(asset.pubkey())
            .collection(Some(collection.address))
            .payer(self.payer.pubkey())
            .name(name.to_string())
            .uri(uri.to_string())
            .instruction();

        let signature = self.send_instruction(instruction, Some(&asset)).await?;
        tracing::info!(
            asset = %asset.pubkey(),
            collection = %collection.address,
            %signature,
            "Asset created",
        );

        Ok(CreatedAccount {
            address: asset.pubkey(),
            signature,
        })
    }

    async fn add_freeze_plugin(
        &self,
        asset: &Pubkey,
        collection: &Pubkey,
    ) -> Result<Signature, ClientError> {
        let instruction = AddPluginV1Builder::new()
            .asset(*asset)
            .collection(Some(*collection))
            .payer(self.payer.pubkey())
            .plugin(Plugin::FreezeDelegate(FreezeDelegate { frozen: false }))
            .instruction();

        let signature = self.send_instruction(instruction, None).await?;
        tracing::info!(asset = %asset, %signature, "Freeze delegate attached");
        Ok(signature)
    }

    async fn freeze_asset(
        &self,
        asset: &AssetView,
        collection: &CollectionView,
    ) -> Result<Signature, ClientError> {
        let signature = self
            .set_frozen(&asset.address, &collection.address, true)
            .await?;
        tracing::info!(asset = %asset.address, %signature, "Asset frozen");
        Ok(signature)
    }

    async fn thaw_asset(
        &self,
        asset: &AssetView,
        collection: &CollectionView,
    ) -> Result<Signature, ClientError> {
        let signature = self
            .set_frozen(&asset.address, &collection.address, false)
            .await?;
        tracing::info!(asset = %asset.address, %signature, "Asset thawed");
        Ok(signature)
    }

    async fn fetch_asset(&self, address: &Pubkey) -> Result<AssetView, ClientError> {
        let data = self.account_data(address).await?;
        let asset = Asset::from_bytes(&data).map_err(|source| ClientError::Deserialize {
            kind: "asset",
            address: *address,
            source,
        })?;

        let update_authority = match asset.base.update_authority {
            UpdateAuthority::None => UpdateAuthorityKind::None,
            UpdateAuthority::Address(authority) => UpdateAuthorityKind::Address(authority),
            UpdateAuthority::Collection(collection) => {
                UpdateAuthorityKind::Collection(collection)
            }
        };

        let frozen = asset
            .plugin_list
            .freeze_delegate
            .as_ref()
            .map(|plugin| plugin.freeze_delegate.frozen);

        Ok(AssetView {
            address: *address,
            name: asset.base.name,
            uri: asset.base.uri,
            owner: asset.base.owner,
            update_authority,
            frozen,
        })
    }
}

impl RpcLedgerClient {
    /// Update the freeze-delegate plugin to the requested frozen state.
    async fn set_frozen(
        &self,
        asset: &Pubkey,
        collection: &Pubkey,
        frozen: bool,
    ) -> Result<Signature, ClientError> {
        let instruction = UpdatePluginV1Builder::new()
            .asset(*asset)
            .collection(Some(*collection))
            .payer(self.payer.pubkey())
            .plugin(Plugin::FreezeDelegate(FreezeDelegate { frozen }))
            .instruction();

        self.send_instruction(instruction, None).await
    }
}

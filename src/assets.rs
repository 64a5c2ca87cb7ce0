multiversx_sc::imports!();

use crate::asset_proxy::AssetAdapterProxy;
use crate::errors::*;
use crate::types::AssetInfo;

// ============================================================
// Asset registry: adapters the treasury can swap into and
// out of. Registration only grows.
// ============================================================

#[multiversx_sc::module]
pub trait AssetsModule {
    fn register_asset(&self, asset: &ManagedAddress) {
        self.require_asset_registrable(asset);
        self.assets().insert(asset.clone());
    }

    fn require_asset_registrable(&self, asset: &ManagedAddress) {
        require!(!self.assets().contains(asset), ERR_ASSET_EXISTS);
        require!(
            self.blockchain().is_smart_contract(asset),
            ERR_ASSET_NOT_CONTRACT
        );
    }

    /// The fund's own address stands for the native currency.
    fn is_native(&self, holding: &ManagedAddress) -> bool {
        *holding == self.blockchain().get_sc_address()
    }

    fn require_known_holding(&self, holding: &ManagedAddress) {
        require!(
            self.is_native(holding) || self.assets().contains(holding),
            ERR_ASSET_NOT_FOUND
        );
    }

    fn native_balance(&self) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0)
    }

    /// Balance of a holding in its own unit.
    fn holding_balance(&self, holding: &ManagedAddress) -> BigUint {
        if self.is_native(holding) {
            self.native_balance()
        } else {
            self.asset_token_balance(holding)
        }
    }

    fn total_asset_value(&self) -> BigUint {
        let mut total = BigUint::zero();
        for asset in self.assets().iter() {
            total += self.asset_value(&asset);
        }
        total
    }

    // ── Adapter calls ──

    fn asset_value(&self, asset: &ManagedAddress) -> BigUint {
        self.tx()
            .to(asset)
            .typed(AssetAdapterProxy)
            .get_total_balance()
            .returns(ReturnsResult)
            .sync_call()
    }

    fn asset_token_balance(&self, asset: &ManagedAddress) -> BigUint {
        self.tx()
            .to(asset)
            .typed(AssetAdapterProxy)
            .get_token_balance()
            .returns(ReturnsResult)
            .sync_call()
    }

    fn asset_name(&self, asset: &ManagedAddress) -> ManagedBuffer {
        self.tx()
            .to(asset)
            .typed(AssetAdapterProxy)
            .get_name()
            .returns(ReturnsResult)
            .sync_call()
    }

    /// Returns the units acquired.
    fn swap_into_asset(&self, asset: &ManagedAddress, native_amount: &BigUint) -> BigUint {
        self.tx()
            .to(asset)
            .typed(AssetAdapterProxy)
            .swap_in()
            .egld(native_amount)
            .returns(ReturnsResult)
            .sync_call()
    }

    /// Returns the native amount the adapter sent to `destination`.
    fn swap_out_of_asset(
        &self,
        asset: &ManagedAddress,
        units: &BigUint,
        destination: &ManagedAddress,
    ) -> BigUint {
        self.tx()
            .to(asset)
            .typed(AssetAdapterProxy)
            .swap_out(units.clone(), destination.clone())
            .returns(ReturnsResult)
            .sync_call()
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getAssets)]
    fn get_assets(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for asset in self.assets().iter() {
            result.push(asset);
        }
        result
    }

    #[view(getAssetDetails)]
    fn get_asset_details(&self) -> MultiValueEncoded<AssetInfo<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for asset in self.assets().iter() {
            result.push(AssetInfo {
                name: self.asset_name(&asset),
                value: self.asset_value(&asset),
                address: asset,
            });
        }
        result
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("assets")]
    fn assets(&self) -> SetMapper<ManagedAddress>;
}

multiversx_sc::imports!();

use crate::errors::*;
use crate::types::AssetLiquidation;
use crate::{assets, membership};

pub const PERCENT_DENOMINATOR: u64 = 100;

/// `amount * share_units / total_balance`. Truncates, so rounding
/// always favours the fund.
pub fn proportional_share<M: ManagedTypeApi>(
    amount: &BigUint<M>,
    share_units: &BigUint<M>,
    total_balance: &BigUint<M>,
) -> BigUint<M> {
    if *total_balance == 0u64 {
        return BigUint::zero();
    }
    amount * share_units / total_balance
}

/// Share units an exit of `percent` burns. A full exit burns everything.
pub fn exit_burn<M: ManagedTypeApi>(member_balance: &BigUint<M>, percent: u64) -> BigUint<M> {
    if percent == PERCENT_DENOMINATOR {
        member_balance.clone()
    } else {
        member_balance * percent / PERCENT_DENOMINATOR
    }
}

// ============================================================
// Treasury accounting: value of the pool and what a member's
// share units are worth against it.
// ============================================================

#[multiversx_sc::module]
pub trait TreasuryModule: membership::MembershipModule + assets::AssetsModule {
    fn total_value(&self) -> BigUint {
        self.native_balance() + self.total_asset_value()
    }

    /// Share units the exit burns. Every payout is measured against
    /// these, so a partial exit that burns nothing pays nothing.
    fn exit_share_units(&self, member_balance: &BigUint, percent: u64) -> BigUint {
        require!(percent <= PERCENT_DENOMINATOR, ERR_INVALID_PERCENTAGE);

        let burned = exit_burn(member_balance, percent);
        require!(
            percent == PERCENT_DENOMINATOR || burned > 0u64,
            ERR_EXIT_TOO_SMALL
        );
        burned
    }

    /// Native payout owed to an exiting member, before any asset is sold.
    fn native_exit_share(&self, burned: &BigUint) -> BigUint {
        proportional_share(&self.native_balance(), burned, &self.total_balance().get())
    }

    /// Units of every asset that must be sold for an exiting member.
    fn asset_exit_shares(
        &self,
        burned: &BigUint,
    ) -> ManagedVec<Self::Api, AssetLiquidation<Self::Api>> {
        let total_balance = self.total_balance().get();
        let mut liquidations = ManagedVec::new();

        for asset in self.assets().iter() {
            let units =
                proportional_share(&self.asset_token_balance(&asset), burned, &total_balance);
            if units > 0u64 {
                liquidations.push(AssetLiquidation { asset, units });
            }
        }
        liquidations
    }

    /// A full exit removes the member.
    fn burn_exit_share(&self, member: &ManagedAddress, burned: &BigUint, percent: u64) {
        if percent == PERCENT_DENOMINATOR {
            self.remove_member(member);
        } else {
            self.debit_member(member, burned);
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// Native balance plus the market value of every registered asset.
    #[view(getTotalValue)]
    fn get_total_value(&self) -> BigUint {
        self.total_value()
    }

    #[view(getNativeBalance)]
    fn get_native_balance(&self) -> BigUint {
        self.native_balance()
    }

    /// What the member's share units are worth at current prices.
    #[view(getMemberValue)]
    fn get_member_value(&self, address: ManagedAddress) -> BigUint {
        self.require_member_exists(&address);
        proportional_share(
            &self.total_value(),
            &self.member_balance(&address).get(),
            &self.total_balance().get(),
        )
    }
}

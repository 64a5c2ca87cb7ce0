#![no_std]

multiversx_sc::imports!();

/// Prices are quoted in EGLD per `PRICE_PRECISION` units.
const PRICE_PRECISION: u64 = 1_000;

// ============================================================
// Asset adapter with an owner-set price. Holds units on behalf
// of a single fund and settles swaps out of its own EGLD
// reserve, so the owner can simulate market moves.
// ============================================================

#[multiversx_sc::contract]
pub trait FixedRateAsset {
    #[init]
    fn init(&self, name: ManagedBuffer, price: BigUint, fund: ManagedAddress) {
        require!(price > 0u64, "Price must be positive");

        self.name().set(&name);
        self.price().set(&price);
        self.fund().set(&fund);
        self.units().set(BigUint::zero());
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(setPrice)]
    fn set_price(&self, price: BigUint) {
        require!(price > 0u64, "Price must be positive");
        self.price().set(&price);
        self.price_changed_event(&price);
    }

    // ========================================================
    // ENDPOINT: swapIn (EGLD in, units credited to the fund)
    // ========================================================

    #[payable("EGLD")]
    #[endpoint(swapIn)]
    fn swap_in(&self) -> BigUint {
        self.require_fund_caller();
        let payment = self.call_value().egld_value().clone_value();

        let units = &payment * PRICE_PRECISION / &self.price().get();
        require!(units > 0u64, "Payment too small");

        self.units().update(|held| *held += &units);
        self.swap_in_event(&payment, &units);
        units
    }

    // ========================================================
    // ENDPOINT: swapOut (units sold, EGLD sent to destination)
    // ========================================================

    #[endpoint(swapOut)]
    fn swap_out(&self, units: BigUint, destination: ManagedAddress) -> BigUint {
        self.require_fund_caller();
        require!(units <= self.units().get(), "Not enough units");

        let value = self.value_of(&units);
        require!(
            value <= self.blockchain().get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0),
            "Insufficient reserve"
        );

        self.units().update(|held| *held -= &units);
        if value > 0u64 {
            self.send().direct_egld(&destination, &value);
        }

        self.swap_out_event(&destination, &units, &value);
        value
    }

    fn require_fund_caller(&self) {
        require!(
            self.blockchain().get_caller() == self.fund().get(),
            "Only the fund can swap"
        );
    }

    fn value_of(&self, units: &BigUint) -> BigUint {
        units * &self.price().get() / PRICE_PRECISION
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getName)]
    fn get_name(&self) -> ManagedBuffer {
        self.name().get()
    }

    #[view(getTotalBalance)]
    fn get_total_balance(&self) -> BigUint {
        self.value_of(&self.units().get())
    }

    #[view(getTokenBalance)]
    fn get_token_balance(&self) -> BigUint {
        self.units().get()
    }

    #[view(getPrice)]
    fn get_price(&self) -> BigUint {
        self.price().get()
    }

    #[view(getFund)]
    fn get_fund(&self) -> ManagedAddress {
        self.fund().get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("priceChanged")]
    fn price_changed_event(&self, price: &BigUint);

    #[event("swapIn")]
    fn swap_in_event(&self, #[indexed] payment: &BigUint, units: &BigUint);

    #[event("swapOut")]
    fn swap_out_event(
        &self,
        #[indexed] destination: &ManagedAddress,
        #[indexed] units: &BigUint,
        value: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("name")]
    fn name(&self) -> SingleValueMapper<ManagedBuffer>;

    #[storage_mapper("price")]
    fn price(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("fund")]
    fn fund(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("units")]
    fn units(&self) -> SingleValueMapper<BigUint>;
}

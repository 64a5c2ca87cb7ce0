multiversx_sc::imports!();

use crate::errors::*;
use crate::types::Member;

// ============================================================
// Membership ledger: who can govern, and how many share
// units each of them holds.
// ============================================================

#[multiversx_sc::module]
pub trait MembershipModule {
    fn add_member(&self, name: &ManagedBuffer, address: &ManagedAddress) {
        require!(!self.members().contains(address), ERR_MEMBER_EXISTS);

        self.members().insert(address.clone());
        self.member_name(address).set(name);
        self.member_balance(address).set(BigUint::zero());
    }

    /// Drops the member and returns the share units it held.
    fn remove_member(&self, address: &ManagedAddress) -> BigUint {
        self.require_member_exists(address);

        let balance = self.member_balance(address).take();
        self.member_name(address).clear();
        self.members().remove(address);
        self.total_balance().update(|total| *total -= &balance);

        balance
    }

    fn credit_member(&self, address: &ManagedAddress, amount: &BigUint) {
        self.require_member_exists(address);

        self.member_balance(address).update(|balance| *balance += amount);
        self.total_balance().update(|total| *total += amount);
    }

    fn debit_member(&self, address: &ManagedAddress, amount: &BigUint) {
        self.require_member_exists(address);
        let balance = self.member_balance(address).get();
        require!(&balance >= amount, ERR_BALANCE_UNDERFLOW);

        self.member_balance(address).set(&balance - amount);
        self.total_balance().update(|total| *total -= amount);
    }

    fn require_member(&self, address: &ManagedAddress) {
        require!(self.members().contains(address), ERR_NOT_A_MEMBER);
    }

    fn require_member_exists(&self, address: &ManagedAddress) {
        require!(self.members().contains(address), ERR_MEMBER_NOT_FOUND);
    }

    fn build_member(&self, address: ManagedAddress) -> Member<Self::Api> {
        Member {
            name: self.member_name(&address).get(),
            balance: self.member_balance(&address).get(),
            addr: address,
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// Founder first, then in order of admission.
    #[view(getMembers)]
    fn get_members(&self) -> MultiValueEncoded<Member<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for address in self.members().iter() {
            result.push(self.build_member(address));
        }
        result
    }

    #[view(getMember)]
    fn get_member(&self, address: ManagedAddress) -> Member<Self::Api> {
        self.require_member_exists(&address);
        self.build_member(address)
    }

    #[view(isMember)]
    fn is_member(&self, address: ManagedAddress) -> bool {
        self.members().contains(&address)
    }

    /// Sum of all member share units, not the value of the treasury.
    #[view(getTotalBalance)]
    fn get_total_balance(&self) -> BigUint {
        self.total_balance().get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("members")]
    fn members(&self) -> SetMapper<ManagedAddress>;

    #[storage_mapper("memberName")]
    fn member_name(&self, address: &ManagedAddress) -> SingleValueMapper<ManagedBuffer>;

    #[storage_mapper("memberBalance")]
    fn member_balance(&self, address: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("totalBalance")]
    fn total_balance(&self) -> SingleValueMapper<BigUint>;
}

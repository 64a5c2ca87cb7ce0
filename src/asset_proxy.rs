use multiversx_sc::proxy_imports::*;

/// Calls into a pluggable asset adapter. Any contract exposing these
/// endpoints can be registered with the fund.
pub struct AssetAdapterProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for AssetAdapterProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = AssetAdapterProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        AssetAdapterProxyMethods { wrapped_tx: tx }
    }
}

pub struct AssetAdapterProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> AssetAdapterProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn get_name(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedBuffer<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getName")
            .original_result()
    }

    /// Native-currency value of everything the adapter holds for the fund.
    pub fn get_total_balance(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTotalBalance")
            .original_result()
    }

    /// Held amount, in the asset's own unit.
    pub fn get_token_balance(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTokenBalance")
            .original_result()
    }

    /// Payable in EGLD. Returns the asset units acquired.
    pub fn swap_in(self) -> TxTypedCall<Env, From, To, (), Gas, BigUint<Env::Api>> {
        self.wrapped_tx.raw_call("swapIn").original_result()
    }

    /// Sells `amount` units and sends the native proceeds to `destination`.
    /// Returns the native amount sent.
    pub fn swap_out<
        Arg0: ProxyArg<BigUint<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        amount: Arg0,
        destination: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("swapOut")
            .argument(&amount)
            .argument(&destination)
            .original_result()
    }
}

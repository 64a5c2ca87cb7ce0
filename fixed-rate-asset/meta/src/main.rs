fn main() {
    multiversx_sc_meta_lib::cli_main::<fixed_rate_asset::AbiProvider>();
}

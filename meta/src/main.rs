fn main() {
    multiversx_sc_meta_lib::cli_main::<stake_dao::AbiProvider>();
}

pub mod resolve;
pub mod stdin;

pub use resolve::run_resolve;
pub use stdin::run_stdin_shim;

use bitdns_application::use_cases::ResolveNameUseCase;

/// Print one answer line: the address, or NXDOMAIN when the caller should
/// fall back to conventional DNS.
pub(crate) async fn answer(resolve: &ResolveNameUseCase, name: &str) {
    match resolve.execute(name).await {
        Some(address) => println!("{} {}", name, address),
        None => println!("{} NXDOMAIN", name),
    }
}

use addrq_common::Address;

/// Renders addresses the way the CLI prints them.
pub fn rendered(addresses: &[Address]) -> Vec<String> {
    addresses.iter().map(Address::to_string).collect()
}

//! # Address Arithmetic Tests
//!
//! This module contains unit tests for the [`ByteAddr`] type. It verifies
//! address construction, value retrieval, offset calculations, and
//! cache-line numbering, the arithmetic every inspection view is built on.

use tilesim_core::common::addr::ByteAddr;

/// Tests the creation of a [`ByteAddr`] and verifies that the stored value
/// can be retrieved correctly.
#[test]
fn byte_addr_new_and_val() {
    let addr = ByteAddr::new(0x7fff_1234);
    assert_eq!(addr.val(), 0x7fff_1234);
}

/// Tests that a byte address can be initialized to zero.
#[test]
fn byte_addr_zero() {
    let addr = ByteAddr::new(0);
    assert_eq!(addr.val(), 0);
}

/// Tests that advancing an address by a byte count lands where expected.
#[test]
fn byte_addr_add_bytes() {
    let base = ByteAddr::new(0x1000);
    assert_eq!(base.add_bytes(12).val(), 0x100c);
}

/// Tests that advancing by zero bytes is the identity.
#[test]
fn byte_addr_add_zero_bytes() {
    let base = ByteAddr::new(0x1000);
    assert_eq!(base.add_bytes(0), base);
}

/// Tests that the offset of an address from its own value is zero.
#[test]
fn byte_addr_offset_from_self() {
    let addr = ByteAddr::new(0x2000);
    assert_eq!(addr.offset_from(addr), 0);
}

/// Tests that the offset of a derived address from its base equals the
/// byte count it was advanced by.
#[test]
fn byte_addr_offset_from_base() {
    let base = ByteAddr::new(0x2000);
    let elem = base.add_bytes(60);
    assert_eq!(elem.offset_from(base), 60);
}

/// Tests line numbering for an address exactly on a 64-byte line start.
#[test]
fn byte_addr_line_number_aligned() {
    let addr = ByteAddr::new(128);
    assert_eq!(addr.line_number(64), 2);
}

/// Tests that all addresses within one line share the same line number.
#[test]
fn byte_addr_line_number_within_line() {
    let start = ByteAddr::new(64);
    let last = ByteAddr::new(127);
    assert_eq!(start.line_number(64), 1);
    assert_eq!(last.line_number(64), 1);
}

/// Tests that the first byte past a line end lands on the next line.
#[test]
fn byte_addr_line_number_crosses() {
    let last = ByteAddr::new(63);
    let next = ByteAddr::new(64);
    assert_eq!(last.line_number(64), 0);
    assert_eq!(next.line_number(64), 1);
}

/// Tests line numbering against a non-default line size.
#[test]
fn byte_addr_line_number_alternate_geometry() {
    let addr = ByteAddr::new(100);
    assert_eq!(addr.line_number(32), 3);
    assert_eq!(addr.line_number(128), 0);
}

/// Verifies the implementation of ordering for byte addresses.
#[test]
fn byte_addr_ordering() {
    let lo = ByteAddr::new(100);
    let hi = ByteAddr::new(200);
    assert!(lo < hi);
}

/// Verifies that addresses display in hexadecimal.
#[test]
fn byte_addr_displays_hex() {
    let addr = ByteAddr::new(0x1f40);
    assert_eq!(addr.to_string(), "0x1f40");
}

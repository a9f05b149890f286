use super::*;

#[test]
fn mul_div255_identities() {
    for x in [0u16, 1, 127, 254, 255] {
        assert_eq!(mul_div255_u16(x, 255), x);
        assert_eq!(mul_div255_u16(x, 0), 0);
        assert_eq!(u16::from(mul_div255_u8(x, 128)), mul_div255_u16(x, 128));
    }
}

#[test]
fn lerp_u8_endpoints_and_midpoint() {
    assert_eq!(lerp_u8(10, 200, 0), 10);
    assert_eq!(lerp_u8(10, 200, 255), 200);
    assert_eq!(lerp_u8(0, 255, 128), 128);
    // Over-range t clamps to the far endpoint.
    assert_eq!(lerp_u8(10, 200, 1000), 200);
}

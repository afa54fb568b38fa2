//! NLFSR: 32-bit non-linear feedback shift register.
//!
//! KeeLoq-style register clocked 64 times per call. Each clock reads seven
//! taps (bits 31, 28, 23, 17, 13, 4, 1) plus `bit16 ^ bit0`, shifts the
//! register right by one and injects a non-linear feedback bit at bit 31.
//! The mixing engine runs it once on each 32-bit half of `RandomIndex`.

/// Number of clocks applied per call.
const NLFSR_ROUNDS: usize = 64;

/// Returns bit `pos` of `register` as a bool.
#[inline]
fn tap(register: u32, pos: u32) -> bool {
    (register >> pos) & 1 == 1
}

/// Clocks the register 64 times and returns the final register value.
///
/// Pure function: no state is carried between calls. Zero and all-ones are
/// fixed points.
pub(crate) fn nlfsr(mut register: u32) -> u32 {
    for _ in 0..NLFSR_ROUNDS {
        let a = tap(register, 31);
        let b = tap(register, 28);
        let c = tap(register, 23);
        let d = tap(register, 17);
        let e = tap(register, 13);
        let f = tap(register, 4);
        let g = tap(register, 1);
        let h = tap(register, 16) ^ tap(register, 0);

        register >>= 1;

        let feedback0 = (b ^ g) ^ (a ^ f);
        let feedback1 = (a & d) ^ (a & g);
        let feedback2 = (b & c) ^ (b & d) ^ (b & e);
        let feedback3 = ((e & f) == (d & f)) == (c & f);
        let feedback4 = ((f & g) == (e & g)) == (d & g);
        let feedback5 = (a & b & g) ^ (a & d & g) ^ (a & f & g);
        let feedback6 = (a & b & c) ^ (b & c & d) ^ (c & d & e) ^ (d & e & f) ^ (e & f & g);
        let feedback7 = (a & c & e & g) ^ (b & d & f);

        let feedback = h
            ^ feedback0
            ^ feedback1
            ^ feedback2
            ^ feedback3
            ^ feedback4
            ^ feedback5
            ^ feedback6
            ^ feedback7;
        register ^= u32::from(feedback) << 31;
    }
    register
}

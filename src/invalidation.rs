use bitflags::bitflags;

bitflags! {
    /// Flags indicating what the host must redo after a button changed
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct ChangeFlags: u8 {
        /// Natural size or arrangement may have changed
        const NEEDS_LAYOUT = 0b01;
        /// Visual appearance changed
        const NEEDS_PAINT  = 0b10;
    }
}

use bitflags::bitflags;

bitflags! {
    /// Static properties of a parser type, recorded in rule trace events.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ParserFlags: u8 {
        const HAS_ATTRIBUTE = 1 << 0;
        const HANDLES_CONTAINER = 1 << 1;
        const HAS_ACTION = 1 << 2;
    }
}

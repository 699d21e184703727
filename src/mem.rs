//! Thin adapter to guest physical memory, deliberately unchecked: bounds and
//! alignment are guaranteed by the IR producer via the guest MMU model, not by
//! this crate. No method here can fail, mirroring `Memory::ReadUnchecked_U*` /
//! `WriteUnchecked_*` in the component this crate's interpreter drives.

/// Guest memory as seen by the IR interpreter. Implementations back onto however
/// the embedder represents guest physical RAM (a flat `Vec<u8>`, an MMIO-aware
/// bus shared with a GPU emulator, etc).
///
/// Unlike a full CPU bus that can fault on bad addresses, every method here is
/// infallible: per the guest architecture's unchecked-access contract, an invalid
/// `addr` is undefined behavior in the guest, not a recoverable host error.
pub trait MemoryBus {
    fn read_u8(&self, addr: u32) -> u8;
    fn read_u16(&self, addr: u32) -> u16;
    fn read_u32(&self, addr: u32) -> u32;
    fn read_f32(&self, addr: u32) -> f32 {
        f32::from_bits(self.read_u32(addr))
    }

    fn write_u8(&mut self, addr: u32, value: u8);
    fn write_u16(&mut self, addr: u32, value: u16);
    fn write_u32(&mut self, addr: u32, value: u32);
    fn write_f32(&mut self, addr: u32, value: f32) {
        self.write_u32(addr, value.to_bits());
    }
}

/// A flat, `Vec<u8>`-backed [`MemoryBus`] used by tests and other harnesses that
/// don't need the full guest memory map.
#[derive(Debug, Clone)]
pub struct FlatMemoryBus {
    data: Vec<u8>,
}

impl FlatMemoryBus {
    pub fn new(size: usize) -> Self {
        FlatMemoryBus {
            data: vec![0u8; size],
        }
    }

    pub fn load(&mut self, addr: u32, bytes: &[u8]) {
        let off = addr as usize;
        self.data[off..off + bytes.len()].copy_from_slice(bytes);
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl MemoryBus for FlatMemoryBus {
    fn read_u8(&self, addr: u32) -> u8 {
        self.data[addr as usize]
    }

    fn read_u16(&self, addr: u32) -> u16 {
        let off = addr as usize;
        u16::from_le_bytes(self.data[off..off + 2].try_into().unwrap())
    }

    fn read_u32(&self, addr: u32) -> u32 {
        let off = addr as usize;
        u32::from_le_bytes(self.data[off..off + 4].try_into().unwrap())
    }

    fn write_u8(&mut self, addr: u32, value: u8) {
        self.data[addr as usize] = value;
    }

    fn write_u16(&mut self, addr: u32, value: u16) {
        let off = addr as usize;
        self.data[off..off + 2].copy_from_slice(&value.to_le_bytes());
    }

    fn write_u32(&mut self, addr: u32, value: u32) {
        let off = addr as usize;
        self.data[off..off + 4].copy_from_slice(&value.to_le_bytes());
    }
}

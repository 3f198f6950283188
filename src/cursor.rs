use crate::error::TextureError;

/// Little-endian reader over a byte slice.
pub(crate) struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub(crate) fn at(data: &'a [u8], pos: usize) -> Result<Self, TextureError> {
        let mut cursor = Self::new(data);
        cursor.set_position(pos)?;
        Ok(cursor)
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn eof(&self) -> bool {
        self.pos >= self.data.len()
    }

    pub(crate) fn set_position(&mut self, pos: usize) -> Result<(), TextureError> {
        if pos > self.data.len() {
            return Err(TextureError::UnexpectedEof { offset: pos });
        }
        self.pos = pos;
        Ok(())
    }

    pub(crate) fn skip(&mut self, n: usize) -> Result<(), TextureError> {
        let new_pos = self
            .pos
            .checked_add(n)
            .ok_or(TextureError::UnexpectedEof { offset: self.pos })?;
        self.set_position(new_pos)
    }

    pub(crate) fn get_u32_le(&mut self) -> Result<u32, TextureError> {
        Ok(u32::from_le_bytes(self.read_fixed_bytes()?))
    }

    pub(crate) fn get_u64_le(&mut self) -> Result<u64, TextureError> {
        Ok(u64::from_le_bytes(self.read_fixed_bytes()?))
    }

    pub(crate) fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N], TextureError> {
        let bytes = self.read_slice(N)?;
        let mut buf = [0u8; N];
        buf.copy_from_slice(bytes);
        Ok(buf)
    }

    pub(crate) fn read_slice(&mut self, n: usize) -> Result<&'a [u8], TextureError> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|&end| end <= self.data.len())
            .ok_or(TextureError::UnexpectedEof { offset: self.pos })?;
        let bytes = &self.data[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_little_endian() {
        let data = [1, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 1];
        let mut cursor = Cursor::new(&data);
        assert_eq!(cursor.get_u32_le().unwrap(), 1);
        assert_eq!(cursor.get_u64_le().unwrap(), 0x0100_0000_0000_0002);
        assert!(cursor.eof());
        assert!(cursor.get_u32_le().is_err());
    }

    #[test]
    fn bounds() {
        let data = [0u8; 4];
        assert!(Cursor::at(&data, 5).is_err());
        let mut cursor = Cursor::at(&data, 2).unwrap();
        assert!(cursor.read_slice(3).is_err());
        assert_eq!(cursor.position(), 2);
        cursor.skip(2).unwrap();
        assert!(cursor.skip(1).is_err());
    }
}

pub mod error;
pub mod result;
pub mod server;
pub mod worker;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::models::fragments::fragment::Fragment;

use self::{error::NetworkingError, result::NetworkingResult};

// Frame layout, all integers big-endian:
//
//   u32 message_length   json + data bytes
//   u32 json_length
//   json_length bytes    UTF-8 JSON
//   remaining bytes      binary data

#[derive(Debug, Clone)]
pub struct RawMessage {
    pub message_length: u32,
    pub json_length: u32,
    pub json_message: String,
    pub data: Vec<u8>,
}

pub async fn send_message<W>(
    stream: &mut W,
    json_message: &[u8],
    data: Option<&[u8]>,
) -> NetworkingResult<()>
where
    W: AsyncWrite + Unpin,
{
    let json_message_size = json_message.len() as u32;
    let data_size = match data {
        Some(data) => data.len() as u32,
        None => 0,
    };
    let total_message_size = json_message_size + data_size;

    let mut buffer = Vec::with_capacity(8 + total_message_size as usize);
    buffer.extend_from_slice(&total_message_size.to_be_bytes());
    buffer.extend_from_slice(&json_message_size.to_be_bytes());
    buffer.extend_from_slice(json_message);
    if let Some(data) = data {
        buffer.extend_from_slice(data);
    };

    stream.write_all(&buffer).await?;
    Ok(stream.flush().await?)
}

/// Serializes a fragment and sends it with optional binary data.
pub async fn send_fragment<W, T>(stream: &mut W, fragment: &T, data: Option<&[u8]>) -> NetworkingResult<()>
where
    W: AsyncWrite + Unpin,
    T: Fragment,
{
    let json = fragment.to_json()?.to_string();
    send_message(stream, json.as_bytes(), data).await
}

pub async fn read_message_length<R>(stream: &mut R) -> NetworkingResult<u32>
where
    R: AsyncRead + Unpin,
{
    let mut length_bytes = [0u8; 4];
    stream.read_exact(&mut length_bytes).await?;
    Ok(u32::from_be_bytes(length_bytes))
}

pub async fn read_json_message<R>(stream: &mut R, length: usize) -> NetworkingResult<String>
where
    R: AsyncRead + Unpin,
{
    let mut json_message = vec![0u8; length];
    stream.read_exact(&mut json_message).await?;
    Ok(String::from_utf8_lossy(&json_message).to_string())
}

pub async fn read_binary_data<R>(stream: &mut R, length: usize) -> NetworkingResult<Vec<u8>>
where
    R: AsyncRead + Unpin,
{
    let mut data_message = vec![0u8; length];
    stream.read_exact(&mut data_message).await?;
    Ok(data_message)
}

pub async fn read_message_raw<R>(stream: &mut R) -> NetworkingResult<RawMessage>
where
    R: AsyncRead + Unpin,
{
    let message_length = read_message_length(stream).await?;
    let json_length = read_message_length(stream).await?;
    let data_length = message_length
        .checked_sub(json_length)
        .ok_or(NetworkingError::Frame {
            message_length,
            json_length,
        })?;
    let json_message = read_json_message(stream, json_length as usize).await?;
    let data = read_binary_data(stream, data_length as usize).await?;

    Ok(RawMessage {
        message_length,
        json_length,
        json_message,
        data,
    })
}

pub async fn read_fragment<R, T>(stream: &mut R) -> NetworkingResult<(Vec<u8>, T)>
where
    R: AsyncRead + Unpin,
    T: Fragment,
{
    let raw = read_message_raw(stream).await?;
    let fragment = T::from_json(&raw.json_message)?;
    Ok((raw.data, fragment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fragments::{assignment::Assignment, block_result::BlockResult};

    #[tokio::test]
    async fn frame_layout_is_big_endian_lengths_then_payload() {
        let mut wire = Vec::new();
        send_message(&mut wire, b"{}", Some(&[9u8, 8, 7][..])).await.unwrap();

        assert_eq!(&wire[0..4], &5u32.to_be_bytes());
        assert_eq!(&wire[4..8], &2u32.to_be_bytes());
        assert_eq!(&wire[8..10], b"{}");
        assert_eq!(&wire[10..], &[9, 8, 7]);
    }

    #[tokio::test]
    async fn fragments_come_back_with_their_data() {
        let mut wire = Vec::new();
        send_fragment(&mut wire, &Assignment::Block(4), None).await.unwrap();
        send_fragment(&mut wire, &BlockResult::new(4, vec![]), Some(&[1u8, 2][..]))
            .await
            .unwrap();

        let mut reader = wire.as_slice();
        let (data, assignment) = read_fragment::<_, Assignment>(&mut reader).await.unwrap();
        assert!(data.is_empty());
        assert_eq!(assignment, Assignment::Block(4));

        let (data, result) = read_fragment::<_, BlockResult>(&mut reader).await.unwrap();
        assert_eq!(result.with_pixels(data), BlockResult::new(4, vec![1, 2]));
    }

    #[tokio::test]
    async fn json_longer_than_message_is_rejected() {
        let mut wire = Vec::new();
        wire.extend_from_slice(&1u32.to_be_bytes());
        wire.extend_from_slice(&5u32.to_be_bytes());
        wire.extend_from_slice(b"{}");

        let err = read_message_raw(&mut wire.as_slice()).await.unwrap_err();
        assert!(matches!(
            err,
            NetworkingError::Frame {
                message_length: 1,
                json_length: 5
            }
        ));
    }

    #[tokio::test]
    async fn eof_at_frame_boundary_is_a_disconnect() {
        let err = read_message_raw(&mut &b""[..]).await.unwrap_err();
        assert!(err.is_disconnect());
    }
}

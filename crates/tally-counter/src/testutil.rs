//! Loopback HTTP stub for exercising the client against a real socket.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::JoinHandle;

/// Spawn a stub server answering `hits` requests with a fixed response.
///
/// Returns the endpoint URL and the server thread handle. Each response
/// closes its connection, so sequential requests each reach the listener.
pub(crate) fn serve(
    hits: usize,
    status_line: &'static str,
    content_type: &'static str,
    body: &'static str,
) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
    let addr = listener.local_addr().expect("stub listener address");

    let handle = std::thread::spawn(move || {
        for _ in 0..hits {
            let Ok((stream, _)) = listener.accept() else {
                return;
            };
            respond(stream, status_line, content_type, body);
        }
    });

    (format!("http://{addr}/views"), handle)
}

/// An endpoint URL that refuses connections.
///
/// Binds an ephemeral port and drops the listener, so nothing is listening
/// at the returned address.
pub(crate) fn refused_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe listener");
    let addr = listener.local_addr().expect("probe listener address");
    drop(listener);
    format!("http://{addr}/views")
}

/// Read one request and write the canned response.
fn respond(mut stream: TcpStream, status_line: &str, content_type: &str, body: &str) {
    let mut request = Vec::new();
    let mut buf = [0_u8; 1024];

    // GET requests carry no body, so the request ends with the header block
    loop {
        match stream.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => {
                request.extend_from_slice(&buf[..n]);
                if request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            Err(_) => return,
        }
    }

    let response = format!(
        "HTTP/1.1 {status_line}\r\n\
         Content-Type: {content_type}\r\n\
         Content-Length: {}\r\n\
         Connection: close\r\n\
         \r\n\
         {body}",
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
}

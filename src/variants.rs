// @generated by `chromium-net-errors generate`. Do not edit by hand.

use crate::category::ErrorType;
use crate::variant::ErrorVariant;

impl ErrorVariant {
    /// An asynchronous IO operation is not yet complete. This usually does not reflect a fatal error, but rather that some operation is still pending and will complete asynchronously.
    pub const IO_PENDING_ERROR: ErrorVariant = ErrorVariant::builtin(
        "IoPendingError",
        -1,
        ErrorType::System,
        "An asynchronous IO operation is not yet complete. This usually does not reflect a fatal error, but rather that some operation is still pending and will complete asynchronously.",
        Some("ERR_IO_PENDING"),
    );

    /// A generic failure occurred.
    pub const FAILED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "FailedError",
        -2,
        ErrorType::System,
        "A generic failure occurred.",
        Some("ERR_FAILED"),
    );

    /// An operation was aborted (due to user action).
    pub const ABORTED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "AbortedError",
        -3,
        ErrorType::System,
        "An operation was aborted (due to user action).",
        Some("ERR_ABORTED"),
    );

    /// An argument to the function is incorrect.
    pub const INVALID_ARGUMENT_ERROR: ErrorVariant = ErrorVariant::builtin(
        "InvalidArgumentError",
        -4,
        ErrorType::System,
        "An argument to the function is incorrect.",
        Some("ERR_INVALID_ARGUMENT"),
    );

    /// The handle or file descriptor is invalid.
    pub const INVALID_HANDLE_ERROR: ErrorVariant = ErrorVariant::builtin(
        "InvalidHandleError",
        -5,
        ErrorType::System,
        "The handle or file descriptor is invalid.",
        Some("ERR_INVALID_HANDLE"),
    );

    /// The file or directory cannot be found.
    pub const FILE_NOT_FOUND_ERROR: ErrorVariant = ErrorVariant::builtin(
        "FileNotFoundError",
        -6,
        ErrorType::System,
        "The file or directory cannot be found.",
        Some("ERR_FILE_NOT_FOUND"),
    );

    /// An operation timed out.
    pub const TIMED_OUT_ERROR: ErrorVariant = ErrorVariant::builtin(
        "TimedOutError",
        -7,
        ErrorType::System,
        "An operation timed out.",
        Some("ERR_TIMED_OUT"),
    );

    /// The file is too large.
    pub const FILE_TOO_BIG_ERROR: ErrorVariant = ErrorVariant::builtin(
        "FileTooBigError",
        -8,
        ErrorType::System,
        "The file is too large.",
        Some("ERR_FILE_TOO_BIG"),
    );

    /// An unexpected error. This may be caused by a programming mistake or an invalid assumption.
    pub const UNEXPECTED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "UnexpectedError",
        -9,
        ErrorType::System,
        "An unexpected error. This may be caused by a programming mistake or an invalid assumption.",
        Some("ERR_UNEXPECTED"),
    );

    /// Permission to access a resource, other than the network, was denied.
    pub const ACCESS_DENIED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "AccessDeniedError",
        -10,
        ErrorType::System,
        "Permission to access a resource, other than the network, was denied.",
        Some("ERR_ACCESS_DENIED"),
    );

    /// The operation failed because of unimplemented functionality.
    pub const NOT_IMPLEMENTED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "NotImplementedError",
        -11,
        ErrorType::System,
        "The operation failed because of unimplemented functionality.",
        Some("ERR_NOT_IMPLEMENTED"),
    );

    /// There were not enough resources to complete the operation.
    pub const INSUFFICIENT_RESOURCES_ERROR: ErrorVariant = ErrorVariant::builtin(
        "InsufficientResourcesError",
        -12,
        ErrorType::System,
        "There were not enough resources to complete the operation.",
        Some("ERR_INSUFFICIENT_RESOURCES"),
    );

    /// Memory allocation failed.
    pub const OUT_OF_MEMORY_ERROR: ErrorVariant = ErrorVariant::builtin(
        "OutOfMemoryError",
        -13,
        ErrorType::System,
        "Memory allocation failed.",
        Some("ERR_OUT_OF_MEMORY"),
    );

    /// The file upload failed because the file's modification time was different from the expectation.
    pub const UPLOAD_FILE_CHANGED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "UploadFileChangedError",
        -14,
        ErrorType::System,
        "The file upload failed because the file's modification time was different from the expectation.",
        Some("ERR_UPLOAD_FILE_CHANGED"),
    );

    /// The socket is not connected.
    pub const SOCKET_NOT_CONNECTED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "SocketNotConnectedError",
        -15,
        ErrorType::System,
        "The socket is not connected.",
        Some("ERR_SOCKET_NOT_CONNECTED"),
    );

    /// The file already exists.
    pub const FILE_EXISTS_ERROR: ErrorVariant = ErrorVariant::builtin(
        "FileExistsError",
        -16,
        ErrorType::System,
        "The file already exists.",
        Some("ERR_FILE_EXISTS"),
    );

    /// The path or file name is too long.
    pub const FILE_PATH_TOO_LONG_ERROR: ErrorVariant = ErrorVariant::builtin(
        "FilePathTooLongError",
        -17,
        ErrorType::System,
        "The path or file name is too long.",
        Some("ERR_FILE_PATH_TOO_LONG"),
    );

    /// Not enough room left on the disk.
    pub const FILE_NO_SPACE_ERROR: ErrorVariant = ErrorVariant::builtin(
        "FileNoSpaceError",
        -18,
        ErrorType::System,
        "Not enough room left on the disk.",
        Some("ERR_FILE_NO_SPACE"),
    );

    /// The file has a virus.
    pub const FILE_VIRUS_INFECTED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "FileVirusInfectedError",
        -19,
        ErrorType::System,
        "The file has a virus.",
        Some("ERR_FILE_VIRUS_INFECTED"),
    );

    /// The client chose to block the request.
    pub const BLOCKED_BY_CLIENT_ERROR: ErrorVariant = ErrorVariant::builtin(
        "BlockedByClientError",
        -20,
        ErrorType::System,
        "The client chose to block the request.",
        Some("ERR_BLOCKED_BY_CLIENT"),
    );

    /// The network changed.
    pub const NETWORK_CHANGED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "NetworkChangedError",
        -21,
        ErrorType::System,
        "The network changed.",
        Some("ERR_NETWORK_CHANGED"),
    );

    /// The request was blocked by the URL block list configured by the domain administrator.
    pub const BLOCKED_BY_ADMINISTRATOR_ERROR: ErrorVariant = ErrorVariant::builtin(
        "BlockedByAdministratorError",
        -22,
        ErrorType::System,
        "The request was blocked by the URL block list configured by the domain administrator.",
        Some("ERR_BLOCKED_BY_ADMINISTRATOR"),
    );

    /// The socket is already connected.
    pub const SOCKET_IS_CONNECTED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "SocketIsConnectedError",
        -23,
        ErrorType::System,
        "The socket is already connected.",
        Some("ERR_SOCKET_IS_CONNECTED"),
    );

    /// The upload failed because the upload stream needed to be re-read, due to a retry or a redirect, but the upload stream doesn't support that operation.
    pub const UPLOAD_STREAM_REWIND_NOT_SUPPORTED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "UploadStreamRewindNotSupportedError",
        -25,
        ErrorType::System,
        "The upload failed because the upload stream needed to be re-read, due to a retry or a redirect, but the upload stream doesn't support that operation.",
        Some("ERR_UPLOAD_STREAM_REWIND_NOT_SUPPORTED"),
    );

    /// The request failed because the URLRequestContext is shutting down, or has been shut down.
    pub const CONTEXT_SHUT_DOWN_ERROR: ErrorVariant = ErrorVariant::builtin(
        "ContextShutDownError",
        -26,
        ErrorType::System,
        "The request failed because the URLRequestContext is shutting down, or has been shut down.",
        Some("ERR_CONTEXT_SHUT_DOWN"),
    );

    /// The request failed because the response was delivered along with requirements which are not met ('X-Frame-Options' and 'Content-Security-Policy' ancestor checks and 'Cross-Origin-Resource-Policy' for instance).
    pub const BLOCKED_BY_RESPONSE_ERROR: ErrorVariant = ErrorVariant::builtin(
        "BlockedByResponseError",
        -27,
        ErrorType::System,
        "The request failed because the response was delivered along with requirements which are not met ('X-Frame-Options' and 'Content-Security-Policy' ancestor checks and 'Cross-Origin-Resource-Policy' for instance).",
        Some("ERR_BLOCKED_BY_RESPONSE"),
    );

    /// The request was blocked by system policy disallowing some or all cleartext requests. Used for NetworkSecurityPolicy on Android.
    pub const CLEARTEXT_NOT_PERMITTED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "CleartextNotPermittedError",
        -29,
        ErrorType::System,
        "The request was blocked by system policy disallowing some or all cleartext requests. Used for NetworkSecurityPolicy on Android.",
        Some("ERR_CLEARTEXT_NOT_PERMITTED"),
    );

    /// The request was blocked by a Content Security Policy
    pub const BLOCKED_BY_CSP_ERROR: ErrorVariant = ErrorVariant::builtin(
        "BlockedByCspError",
        -30,
        ErrorType::System,
        "The request was blocked by a Content Security Policy",
        Some("ERR_BLOCKED_BY_CSP"),
    );

    /// The request was blocked because of no H/2 or QUIC session.
    pub const H2_OR_QUIC_REQUIRED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "H2OrQuicRequiredError",
        -31,
        ErrorType::System,
        "The request was blocked because of no H/2 or QUIC session.",
        Some("ERR_H2_OR_QUIC_REQUIRED"),
    );

    /// The request was blocked by CORB or ORB.
    pub const BLOCKED_BY_ORB_ERROR: ErrorVariant = ErrorVariant::builtin(
        "BlockedByOrbError",
        -32,
        ErrorType::System,
        "The request was blocked by CORB or ORB.",
        Some("ERR_BLOCKED_BY_ORB"),
    );

    /// A connection was closed (corresponding to a TCP FIN).
    pub const CONNECTION_CLOSED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "ConnectionClosedError",
        -100,
        ErrorType::Connection,
        "A connection was closed (corresponding to a TCP FIN).",
        Some("ERR_CONNECTION_CLOSED"),
    );

    /// A connection was reset (corresponding to a TCP RST).
    pub const CONNECTION_RESET_ERROR: ErrorVariant = ErrorVariant::builtin(
        "ConnectionResetError",
        -101,
        ErrorType::Connection,
        "A connection was reset (corresponding to a TCP RST).",
        Some("ERR_CONNECTION_RESET"),
    );

    /// A connection attempt was refused.
    pub const CONNECTION_REFUSED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "ConnectionRefusedError",
        -102,
        ErrorType::Connection,
        "A connection attempt was refused.",
        Some("ERR_CONNECTION_REFUSED"),
    );

    /// A connection timed out as a result of not receiving an ACK for data sent. This can include a FIN packet that did not get ACK'd.
    pub const CONNECTION_ABORTED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "ConnectionAbortedError",
        -103,
        ErrorType::Connection,
        "A connection timed out as a result of not receiving an ACK for data sent. This can include a FIN packet that did not get ACK'd.",
        Some("ERR_CONNECTION_ABORTED"),
    );

    /// A connection attempt failed.
    pub const CONNECTION_FAILED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "ConnectionFailedError",
        -104,
        ErrorType::Connection,
        "A connection attempt failed.",
        Some("ERR_CONNECTION_FAILED"),
    );

    /// The host name could not be resolved.
    pub const NAME_NOT_RESOLVED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "NameNotResolvedError",
        -105,
        ErrorType::Connection,
        "The host name could not be resolved.",
        Some("ERR_NAME_NOT_RESOLVED"),
    );

    /// The Internet connection has been lost.
    pub const INTERNET_DISCONNECTED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "InternetDisconnectedError",
        -106,
        ErrorType::Connection,
        "The Internet connection has been lost.",
        Some("ERR_INTERNET_DISCONNECTED"),
    );

    /// An SSL protocol error occurred.
    pub const SSL_PROTOCOL_ERROR: ErrorVariant = ErrorVariant::builtin(
        "SslProtocolError",
        -107,
        ErrorType::Connection,
        "An SSL protocol error occurred.",
        Some("ERR_SSL_PROTOCOL_ERROR"),
    );

    /// The IP address or port number is invalid (e.g., cannot connect to the IP address 0 or the port 0).
    pub const ADDRESS_INVALID_ERROR: ErrorVariant = ErrorVariant::builtin(
        "AddressInvalidError",
        -108,
        ErrorType::Connection,
        "The IP address or port number is invalid (e.g., cannot connect to the IP address 0 or the port 0).",
        Some("ERR_ADDRESS_INVALID"),
    );

    /// The IP address is unreachable. This usually means that there is no route to the specified host or network.
    pub const ADDRESS_UNREACHABLE_ERROR: ErrorVariant = ErrorVariant::builtin(
        "AddressUnreachableError",
        -109,
        ErrorType::Connection,
        "The IP address is unreachable. This usually means that there is no route to the specified host or network.",
        Some("ERR_ADDRESS_UNREACHABLE"),
    );

    /// The server requested a client certificate for SSL client authentication.
    pub const SSL_CLIENT_AUTH_CERT_NEEDED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "SslClientAuthCertNeededError",
        -110,
        ErrorType::Connection,
        "The server requested a client certificate for SSL client authentication.",
        Some("ERR_SSL_CLIENT_AUTH_CERT_NEEDED"),
    );

    /// A tunnel connection through the proxy could not be established.
    pub const TUNNEL_CONNECTION_FAILED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "TunnelConnectionFailedError",
        -111,
        ErrorType::Connection,
        "A tunnel connection through the proxy could not be established.",
        Some("ERR_TUNNEL_CONNECTION_FAILED"),
    );

    /// No SSL protocol versions are enabled.
    pub const NO_SSL_VERSIONS_ENABLED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "NoSslVersionsEnabledError",
        -112,
        ErrorType::Connection,
        "No SSL protocol versions are enabled.",
        Some("ERR_NO_SSL_VERSIONS_ENABLED"),
    );

    /// The client and server don't support a common SSL protocol version or cipher suite.
    pub const SSL_VERSION_OR_CIPHER_MISMATCH_ERROR: ErrorVariant = ErrorVariant::builtin(
        "SslVersionOrCipherMismatchError",
        -113,
        ErrorType::Connection,
        "The client and server don't support a common SSL protocol version or cipher suite.",
        Some("ERR_SSL_VERSION_OR_CIPHER_MISMATCH"),
    );

    /// The server requested a renegotiation (rehandshake).
    pub const SSL_RENEGOTIATION_REQUESTED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "SslRenegotiationRequestedError",
        -114,
        ErrorType::Connection,
        "The server requested a renegotiation (rehandshake).",
        Some("ERR_SSL_RENEGOTIATION_REQUESTED"),
    );

    /// The proxy requested authentication (for tunnel establishment) with an unsupported method.
    pub const PROXY_AUTH_UNSUPPORTED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "ProxyAuthUnsupportedError",
        -115,
        ErrorType::Connection,
        "The proxy requested authentication (for tunnel establishment) with an unsupported method.",
        Some("ERR_PROXY_AUTH_UNSUPPORTED"),
    );

    /// The SSL handshake failed because of a bad or missing client certificate.
    pub const BAD_SSL_CLIENT_AUTH_CERT_ERROR: ErrorVariant = ErrorVariant::builtin(
        "BadSslClientAuthCertError",
        -117,
        ErrorType::Connection,
        "The SSL handshake failed because of a bad or missing client certificate.",
        Some("ERR_BAD_SSL_CLIENT_AUTH_CERT"),
    );

    /// A connection attempt timed out.
    pub const CONNECTION_TIMED_OUT_ERROR: ErrorVariant = ErrorVariant::builtin(
        "ConnectionTimedOutError",
        -118,
        ErrorType::Connection,
        "A connection attempt timed out.",
        Some("ERR_CONNECTION_TIMED_OUT"),
    );

    /// There are too many pending DNS resolves, so a request in the queue was aborted.
    pub const HOST_RESOLVER_QUEUE_TOO_LARGE_ERROR: ErrorVariant = ErrorVariant::builtin(
        "HostResolverQueueTooLargeError",
        -119,
        ErrorType::Connection,
        "There are too many pending DNS resolves, so a request in the queue was aborted.",
        Some("ERR_HOST_RESOLVER_QUEUE_TOO_LARGE"),
    );

    /// Failed establishing a connection to the SOCKS proxy server for a target host.
    pub const SOCKS_CONNECTION_FAILED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "SocksConnectionFailedError",
        -120,
        ErrorType::Connection,
        "Failed establishing a connection to the SOCKS proxy server for a target host.",
        Some("ERR_SOCKS_CONNECTION_FAILED"),
    );

    /// The SOCKS proxy server failed establishing connection to the target host because that host is unreachable.
    pub const SOCKS_CONNECTION_HOST_UNREACHABLE_ERROR: ErrorVariant = ErrorVariant::builtin(
        "SocksConnectionHostUnreachableError",
        -121,
        ErrorType::Connection,
        "The SOCKS proxy server failed establishing connection to the target host because that host is unreachable.",
        Some("ERR_SOCKS_CONNECTION_HOST_UNREACHABLE"),
    );

    /// The request to negotiate an alternate protocol failed.
    pub const ALPN_NEGOTIATION_FAILED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "AlpnNegotiationFailedError",
        -122,
        ErrorType::Connection,
        "The request to negotiate an alternate protocol failed.",
        Some("ERR_ALPN_NEGOTIATION_FAILED"),
    );

    /// The peer sent an SSL no_renegotiation alert message.
    pub const SSL_NO_RENEGOTIATION_ERROR: ErrorVariant = ErrorVariant::builtin(
        "SslNoRenegotiationError",
        -123,
        ErrorType::Connection,
        "The peer sent an SSL no_renegotiation alert message.",
        Some("ERR_SSL_NO_RENEGOTIATION"),
    );

    /// Winsock sometimes reports more data written than passed. This is probably due to a broken LSP.
    pub const WINSOCK_UNEXPECTED_WRITTEN_BYTES_ERROR: ErrorVariant = ErrorVariant::builtin(
        "WinsockUnexpectedWrittenBytesError",
        -124,
        ErrorType::Connection,
        "Winsock sometimes reports more data written than passed. This is probably due to a broken LSP.",
        Some("ERR_WINSOCK_UNEXPECTED_WRITTEN_BYTES"),
    );

    /// An SSL peer sent us a fatal decompression_failure alert. This typically occurs when a peer selects DEFLATE compression in the mistaken belief that it supports it.
    pub const SSL_DECOMPRESSION_FAILURE_ALERT_ERROR: ErrorVariant = ErrorVariant::builtin(
        "SslDecompressionFailureAlertError",
        -125,
        ErrorType::Connection,
        "An SSL peer sent us a fatal decompression_failure alert. This typically occurs when a peer selects DEFLATE compression in the mistaken belief that it supports it.",
        Some("ERR_SSL_DECOMPRESSION_FAILURE_ALERT"),
    );

    /// An SSL peer sent us a fatal bad_record_mac alert. This has been observed from servers with buggy DEFLATE support.
    pub const SSL_BAD_RECORD_MAC_ALERT_ERROR: ErrorVariant = ErrorVariant::builtin(
        "SslBadRecordMacAlertError",
        -126,
        ErrorType::Connection,
        "An SSL peer sent us a fatal bad_record_mac alert. This has been observed from servers with buggy DEFLATE support.",
        Some("ERR_SSL_BAD_RECORD_MAC_ALERT"),
    );

    /// The proxy requested authentication (for tunnel establishment).
    pub const PROXY_AUTH_REQUESTED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "ProxyAuthRequestedError",
        -127,
        ErrorType::Connection,
        "The proxy requested authentication (for tunnel establishment).",
        Some("ERR_PROXY_AUTH_REQUESTED"),
    );

    /// Could not create a connection to the proxy server. An error occurred either in resolving its name, or in connecting a socket to it. Note that this does NOT include failures during the actual "CONNECT" method of an HTTP proxy.
    pub const PROXY_CONNECTION_FAILED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "ProxyConnectionFailedError",
        -130,
        ErrorType::Connection,
        "Could not create a connection to the proxy server. An error occurred either in resolving its name, or in connecting a socket to it. Note that this does NOT include failures during the actual \"CONNECT\" method of an HTTP proxy.",
        Some("ERR_PROXY_CONNECTION_FAILED"),
    );

    /// A mandatory proxy configuration could not be used. Currently this means that a mandatory PAC script could not be fetched, parsed or executed.
    pub const MANDATORY_PROXY_CONFIGURATION_FAILED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "MandatoryProxyConfigurationFailedError",
        -131,
        ErrorType::Connection,
        "A mandatory proxy configuration could not be used. Currently this means that a mandatory PAC script could not be fetched, parsed or executed.",
        Some("ERR_MANDATORY_PROXY_CONFIGURATION_FAILED"),
    );

    /// We've hit the max socket limit for the socket pool while preconnecting. We don't bother trying to preconnect more sockets.
    pub const PRECONNECT_MAX_SOCKET_LIMIT_ERROR: ErrorVariant = ErrorVariant::builtin(
        "PreconnectMaxSocketLimitError",
        -133,
        ErrorType::Connection,
        "We've hit the max socket limit for the socket pool while preconnecting. We don't bother trying to preconnect more sockets.",
        Some("ERR_PRECONNECT_MAX_SOCKET_LIMIT"),
    );

    /// The permission to use the SSL client certificate's private key was denied.
    pub const SSL_CLIENT_AUTH_PRIVATE_KEY_ACCESS_DENIED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "SslClientAuthPrivateKeyAccessDeniedError",
        -134,
        ErrorType::Connection,
        "The permission to use the SSL client certificate's private key was denied.",
        Some("ERR_SSL_CLIENT_AUTH_PRIVATE_KEY_ACCESS_DENIED"),
    );

    /// The SSL client certificate has no private key.
    pub const SSL_CLIENT_AUTH_CERT_NO_PRIVATE_KEY_ERROR: ErrorVariant = ErrorVariant::builtin(
        "SslClientAuthCertNoPrivateKeyError",
        -135,
        ErrorType::Connection,
        "The SSL client certificate has no private key.",
        Some("ERR_SSL_CLIENT_AUTH_CERT_NO_PRIVATE_KEY"),
    );

    /// The certificate presented by the HTTPS Proxy was invalid.
    pub const PROXY_CERTIFICATE_INVALID_ERROR: ErrorVariant = ErrorVariant::builtin(
        "ProxyCertificateInvalidError",
        -136,
        ErrorType::Connection,
        "The certificate presented by the HTTPS Proxy was invalid.",
        Some("ERR_PROXY_CERTIFICATE_INVALID"),
    );

    /// An error occurred when trying to do a name resolution (DNS).
    pub const NAME_RESOLUTION_FAILED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "NameResolutionFailedError",
        -137,
        ErrorType::Connection,
        "An error occurred when trying to do a name resolution (DNS).",
        Some("ERR_NAME_RESOLUTION_FAILED"),
    );

    /// Permission to access the network was denied. This is used to distinguish errors that were most likely caused by a firewall from other access denied errors. See also ERR_ACCESS_DENIED.
    pub const NETWORK_ACCESS_DENIED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "NetworkAccessDeniedError",
        -138,
        ErrorType::Connection,
        "Permission to access the network was denied. This is used to distinguish errors that were most likely caused by a firewall from other access denied errors. See also ERR_ACCESS_DENIED.",
        Some("ERR_NETWORK_ACCESS_DENIED"),
    );

    /// The request throttler module cancelled this request to avoid DDOS.
    pub const TEMPORARILY_THROTTLED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "TemporarilyThrottledError",
        -139,
        ErrorType::Connection,
        "The request throttler module cancelled this request to avoid DDOS.",
        Some("ERR_TEMPORARILY_THROTTLED"),
    );

    /// A request to create an SSL tunnel connection through the HTTPS proxy received a 302 (temporary redirect) response. The response body might include a description of why the request failed.
    pub const HTTPS_PROXY_TUNNEL_RESPONSE_REDIRECT_ERROR: ErrorVariant = ErrorVariant::builtin(
        "HttpsProxyTunnelResponseRedirectError",
        -140,
        ErrorType::Connection,
        "A request to create an SSL tunnel connection through the HTTPS proxy received a 302 (temporary redirect) response. The response body might include a description of why the request failed.",
        Some("ERR_HTTPS_PROXY_TUNNEL_RESPONSE_REDIRECT"),
    );

    /// We were unable to sign the CertificateVerify data of an SSL client auth handshake with the client certificate's private key.
    pub const SSL_CLIENT_AUTH_SIGNATURE_FAILED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "SslClientAuthSignatureFailedError",
        -141,
        ErrorType::Connection,
        "We were unable to sign the CertificateVerify data of an SSL client auth handshake with the client certificate's private key.",
        Some("ERR_SSL_CLIENT_AUTH_SIGNATURE_FAILED"),
    );

    /// The message was too large for the transport. (for example a UDP message which exceeds size threshold).
    pub const MSG_TOO_BIG_ERROR: ErrorVariant = ErrorVariant::builtin(
        "MsgTooBigError",
        -142,
        ErrorType::Connection,
        "The message was too large for the transport. (for example a UDP message which exceeds size threshold).",
        Some("ERR_MSG_TOO_BIG"),
    );

    /// Websocket protocol error. Indicates that we are terminating the connection due to a malformed frame or other protocol violation.
    pub const WS_PROTOCOL_ERROR: ErrorVariant = ErrorVariant::builtin(
        "WsProtocolError",
        -145,
        ErrorType::Connection,
        "Websocket protocol error. Indicates that we are terminating the connection due to a malformed frame or other protocol violation.",
        Some("ERR_WS_PROTOCOL_ERROR"),
    );

    /// Returned when attempting to bind an address that is already in use.
    pub const ADDRESS_IN_USE_ERROR: ErrorVariant = ErrorVariant::builtin(
        "AddressInUseError",
        -147,
        ErrorType::Connection,
        "Returned when attempting to bind an address that is already in use.",
        Some("ERR_ADDRESS_IN_USE"),
    );

    /// An operation failed because the SSL handshake has not completed.
    pub const SSL_HANDSHAKE_NOT_COMPLETED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "SslHandshakeNotCompletedError",
        -148,
        ErrorType::Connection,
        "An operation failed because the SSL handshake has not completed.",
        Some("ERR_SSL_HANDSHAKE_NOT_COMPLETED"),
    );

    /// SSL peer's public key is invalid.
    pub const SSL_BAD_PEER_PUBLIC_KEY_ERROR: ErrorVariant = ErrorVariant::builtin(
        "SslBadPeerPublicKeyError",
        -149,
        ErrorType::Connection,
        "SSL peer's public key is invalid.",
        Some("ERR_SSL_BAD_PEER_PUBLIC_KEY"),
    );

    /// The certificate didn't match the built-in public key pins for the host name. The pins are set in net/http/transport_security_state.cc and require that one of a set of public keys exist on the path from the leaf to the root.
    pub const SSL_PINNED_KEY_NOT_IN_CERT_CHAIN_ERROR: ErrorVariant = ErrorVariant::builtin(
        "SslPinnedKeyNotInCertChainError",
        -150,
        ErrorType::Connection,
        "The certificate didn't match the built-in public key pins for the host name. The pins are set in net/http/transport_security_state.cc and require that one of a set of public keys exist on the path from the leaf to the root.",
        Some("ERR_SSL_PINNED_KEY_NOT_IN_CERT_CHAIN"),
    );

    /// Server request for client certificate did not contain any types we support.
    pub const CLIENT_AUTH_CERT_TYPE_UNSUPPORTED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "ClientAuthCertTypeUnsupportedError",
        -151,
        ErrorType::Connection,
        "Server request for client certificate did not contain any types we support.",
        Some("ERR_CLIENT_AUTH_CERT_TYPE_UNSUPPORTED"),
    );

    /// An SSL peer sent us a fatal decrypt_error alert. This typically occurs when a peer could not correctly verify a signature (in CertificateVerify or ServerKeyExchange) or validate a Finished message.
    pub const SSL_DECRYPT_ERROR_ALERT_ERROR: ErrorVariant = ErrorVariant::builtin(
        "SslDecryptErrorAlertError",
        -153,
        ErrorType::Connection,
        "An SSL peer sent us a fatal decrypt_error alert. This typically occurs when a peer could not correctly verify a signature (in CertificateVerify or ServerKeyExchange) or validate a Finished message.",
        Some("ERR_SSL_DECRYPT_ERROR_ALERT"),
    );

    /// There are too many pending WebSocketJob instances, so the new job was not pushed to the queue.
    pub const WS_THROTTLE_QUEUE_TOO_LARGE_ERROR: ErrorVariant = ErrorVariant::builtin(
        "WsThrottleQueueTooLargeError",
        -154,
        ErrorType::Connection,
        "There are too many pending WebSocketJob instances, so the new job was not pushed to the queue.",
        Some("ERR_WS_THROTTLE_QUEUE_TOO_LARGE"),
    );

    /// The SSL server certificate changed in a renegotiation.
    pub const SSL_SERVER_CERT_CHANGED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "SslServerCertChangedError",
        -156,
        ErrorType::Connection,
        "The SSL server certificate changed in a renegotiation.",
        Some("ERR_SSL_SERVER_CERT_CHANGED"),
    );

    /// The SSL server sent us a fatal unrecognized_name alert.
    pub const SSL_UNRECOGNIZED_NAME_ALERT_ERROR: ErrorVariant = ErrorVariant::builtin(
        "SslUnrecognizedNameAlertError",
        -159,
        ErrorType::Connection,
        "The SSL server sent us a fatal unrecognized_name alert.",
        Some("ERR_SSL_UNRECOGNIZED_NAME_ALERT"),
    );

    /// Failed to set the socket's receive buffer size as requested.
    pub const SOCKET_SET_RECEIVE_BUFFER_SIZE_ERROR: ErrorVariant = ErrorVariant::builtin(
        "SocketSetReceiveBufferSizeError",
        -160,
        ErrorType::Connection,
        "Failed to set the socket's receive buffer size as requested.",
        Some("ERR_SOCKET_SET_RECEIVE_BUFFER_SIZE_ERROR"),
    );

    /// Failed to set the socket's send buffer size as requested.
    pub const SOCKET_SET_SEND_BUFFER_SIZE_ERROR: ErrorVariant = ErrorVariant::builtin(
        "SocketSetSendBufferSizeError",
        -161,
        ErrorType::Connection,
        "Failed to set the socket's send buffer size as requested.",
        Some("ERR_SOCKET_SET_SEND_BUFFER_SIZE_ERROR"),
    );

    /// Failed to set the socket's receive buffer size as requested, despite success return code from setsockopt.
    pub const SOCKET_RECEIVE_BUFFER_SIZE_UNCHANGEABLE_ERROR: ErrorVariant = ErrorVariant::builtin(
        "SocketReceiveBufferSizeUnchangeableError",
        -162,
        ErrorType::Connection,
        "Failed to set the socket's receive buffer size as requested, despite success return code from setsockopt.",
        Some("ERR_SOCKET_RECEIVE_BUFFER_SIZE_UNCHANGEABLE"),
    );

    /// Failed to set the socket's send buffer size as requested, despite success return code from setsockopt.
    pub const SOCKET_SEND_BUFFER_SIZE_UNCHANGEABLE_ERROR: ErrorVariant = ErrorVariant::builtin(
        "SocketSendBufferSizeUnchangeableError",
        -163,
        ErrorType::Connection,
        "Failed to set the socket's send buffer size as requested, despite success return code from setsockopt.",
        Some("ERR_SOCKET_SEND_BUFFER_SIZE_UNCHANGEABLE"),
    );

    /// Failed to import a client certificate from the platform store into the SSL library.
    pub const SSL_CLIENT_AUTH_CERT_BAD_FORMAT_ERROR: ErrorVariant = ErrorVariant::builtin(
        "SslClientAuthCertBadFormatError",
        -164,
        ErrorType::Connection,
        "Failed to import a client certificate from the platform store into the SSL library.",
        Some("ERR_SSL_CLIENT_AUTH_CERT_BAD_FORMAT"),
    );

    /// Resolving a hostname to an IP address list included the IPv4 address "127.0.53.53". This is a special IP address which ICANN has recommended to indicate there was a name collision, and alert admins to a potential problem.
    pub const ICANN_NAME_COLLISION_ERROR: ErrorVariant = ErrorVariant::builtin(
        "IcannNameCollisionError",
        -166,
        ErrorType::Connection,
        "Resolving a hostname to an IP address list included the IPv4 address \"127.0.53.53\". This is a special IP address which ICANN has recommended to indicate there was a name collision, and alert admins to a potential problem.",
        Some("ERR_ICANN_NAME_COLLISION"),
    );

    /// The SSL server presented a certificate which could not be decoded. This is not a certificate error code as no X509Certificate object is available. This error is fatal.
    pub const SSL_SERVER_CERT_BAD_FORMAT_ERROR: ErrorVariant = ErrorVariant::builtin(
        "SslServerCertBadFormatError",
        -167,
        ErrorType::Connection,
        "The SSL server presented a certificate which could not be decoded. This is not a certificate error code as no X509Certificate object is available. This error is fatal.",
        Some("ERR_SSL_SERVER_CERT_BAD_FORMAT"),
    );

    /// Certificate Transparency: Received a signed tree head that failed to parse.
    pub const CT_STH_PARSING_FAILED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "CtSthParsingFailedError",
        -168,
        ErrorType::Connection,
        "Certificate Transparency: Received a signed tree head that failed to parse.",
        Some("ERR_CT_STH_PARSING_FAILED"),
    );

    /// Certificate Transparency: Received a signed tree head whose JSON parsing was OK but was missing some of the fields.
    pub const CT_STH_INCOMPLETE_ERROR: ErrorVariant = ErrorVariant::builtin(
        "CtSthIncompleteError",
        -169,
        ErrorType::Connection,
        "Certificate Transparency: Received a signed tree head whose JSON parsing was OK but was missing some of the fields.",
        Some("ERR_CT_STH_INCOMPLETE"),
    );

    /// The attempt to reuse a connection to send proxy auth credentials failed before the AuthController was used to generate credentials. The caller should reuse the controller with a new connection. This error is only used internally by the network stack.
    pub const UNABLE_TO_REUSE_CONNECTION_FOR_PROXY_AUTH_ERROR: ErrorVariant = ErrorVariant::builtin(
        "UnableToReuseConnectionForProxyAuthError",
        -170,
        ErrorType::Connection,
        "The attempt to reuse a connection to send proxy auth credentials failed before the AuthController was used to generate credentials. The caller should reuse the controller with a new connection. This error is only used internally by the network stack.",
        Some("ERR_UNABLE_TO_REUSE_CONNECTION_FOR_PROXY_AUTH"),
    );

    /// Certificate Transparency: Failed to parse the received consistency proof.
    pub const CT_CONSISTENCY_PROOF_PARSING_FAILED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "CtConsistencyProofParsingFailedError",
        -171,
        ErrorType::Connection,
        "Certificate Transparency: Failed to parse the received consistency proof.",
        Some("ERR_CT_CONSISTENCY_PROOF_PARSING_FAILED"),
    );

    /// The SSL server required an unsupported cipher suite that has since been removed. This error will temporarily be signaled on a fallback for one or two releases immediately following a cipher suite's removal, after which the fallback will be removed.
    pub const SSL_OBSOLETE_CIPHER_ERROR: ErrorVariant = ErrorVariant::builtin(
        "SslObsoleteCipherError",
        -172,
        ErrorType::Connection,
        "The SSL server required an unsupported cipher suite that has since been removed. This error will temporarily be signaled on a fallback for one or two releases immediately following a cipher suite's removal, after which the fallback will be removed.",
        Some("ERR_SSL_OBSOLETE_CIPHER"),
    );

    /// When a WebSocket handshake is done successfully and the connection has been upgraded, the URLRequest is cancelled with this error code.
    pub const WS_UPGRADE_ERROR: ErrorVariant = ErrorVariant::builtin(
        "WsUpgradeError",
        -173,
        ErrorType::Connection,
        "When a WebSocket handshake is done successfully and the connection has been upgraded, the URLRequest is cancelled with this error code.",
        Some("ERR_WS_UPGRADE"),
    );

    /// Socket ReadIfReady support is not implemented. This error should not be user visible, because the normal Read() method is used as a fallback.
    pub const READ_IF_READY_NOT_IMPLEMENTED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "ReadIfReadyNotImplementedError",
        -174,
        ErrorType::Connection,
        "Socket ReadIfReady support is not implemented. This error should not be user visible, because the normal Read() method is used as a fallback.",
        Some("ERR_READ_IF_READY_NOT_IMPLEMENTED"),
    );

    /// No socket buffer space is available.
    pub const NO_BUFFER_SPACE_ERROR: ErrorVariant = ErrorVariant::builtin(
        "NoBufferSpaceError",
        -176,
        ErrorType::Connection,
        "No socket buffer space is available.",
        Some("ERR_NO_BUFFER_SPACE"),
    );

    /// There were no common signature algorithms between our client certificate private key and the server's preferences.
    pub const SSL_CLIENT_AUTH_NO_COMMON_ALGORITHMS_ERROR: ErrorVariant = ErrorVariant::builtin(
        "SslClientAuthNoCommonAlgorithmsError",
        -177,
        ErrorType::Connection,
        "There were no common signature algorithms between our client certificate private key and the server's preferences.",
        Some("ERR_SSL_CLIENT_AUTH_NO_COMMON_ALGORITHMS"),
    );

    /// TLS 1.3 early data was rejected by the server. This will be received before any data is returned from the socket. The request should be retried with early data disabled.
    pub const EARLY_DATA_REJECTED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "EarlyDataRejectedError",
        -178,
        ErrorType::Connection,
        "TLS 1.3 early data was rejected by the server. This will be received before any data is returned from the socket. The request should be retried with early data disabled.",
        Some("ERR_EARLY_DATA_REJECTED"),
    );

    /// TLS 1.3 early data was offered, but the server responded with TLS 1.2 or earlier. This is an internal error code to account for a backwards-compatibility issue with early data and TLS 1.2. It will be received before any data is returned from the socket. The request should be retried with early data disabled.
    pub const WRONG_VERSION_ON_EARLY_DATA_ERROR: ErrorVariant = ErrorVariant::builtin(
        "WrongVersionOnEarlyDataError",
        -179,
        ErrorType::Connection,
        "TLS 1.3 early data was offered, but the server responded with TLS 1.2 or earlier. This is an internal error code to account for a backwards-compatibility issue with early data and TLS 1.2. It will be received before any data is returned from the socket. The request should be retried with early data disabled.",
        Some("ERR_WRONG_VERSION_ON_EARLY_DATA"),
    );

    /// TLS 1.3 was enabled, but a lower version was negotiated and the server returned a value indicating it supported TLS 1.3. This is part of a security check in TLS 1.3, but it may also indicate the user is behind a buggy TLS-terminating proxy which implemented TLS 1.2 incorrectly.
    pub const TLS13_DOWNGRADE_DETECTED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "Tls13DowngradeDetectedError",
        -180,
        ErrorType::Connection,
        "TLS 1.3 was enabled, but a lower version was negotiated and the server returned a value indicating it supported TLS 1.3. This is part of a security check in TLS 1.3, but it may also indicate the user is behind a buggy TLS-terminating proxy which implemented TLS 1.2 incorrectly.",
        Some("ERR_TLS13_DOWNGRADE_DETECTED"),
    );

    /// The server's certificate has a keyUsage extension incompatible with the negotiated TLS key exchange method.
    pub const SSL_KEY_USAGE_INCOMPATIBLE_ERROR: ErrorVariant = ErrorVariant::builtin(
        "SslKeyUsageIncompatibleError",
        -181,
        ErrorType::Connection,
        "The server's certificate has a keyUsage extension incompatible with the negotiated TLS key exchange method.",
        Some("ERR_SSL_KEY_USAGE_INCOMPATIBLE"),
    );

    /// The ECHConfigList fetched over DNS cannot be parsed.
    pub const INVALID_ECH_CONFIG_LIST_ERROR: ErrorVariant = ErrorVariant::builtin(
        "InvalidEchConfigListError",
        -182,
        ErrorType::Connection,
        "The ECHConfigList fetched over DNS cannot be parsed.",
        Some("ERR_INVALID_ECH_CONFIG_LIST"),
    );

    /// ECH was enabled, but the server was unable to decrypt the encrypted ClientHello.
    pub const ECH_NOT_NEGOTIATED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "EchNotNegotiatedError",
        -183,
        ErrorType::Connection,
        "ECH was enabled, but the server was unable to decrypt the encrypted ClientHello.",
        Some("ERR_ECH_NOT_NEGOTIATED"),
    );

    /// ECH was enabled, the server was unable to decrypt the encrypted ClientHello, and additionally did not present a certificate valid for the public name.
    pub const ECH_FALLBACK_CERTIFICATE_INVALID_ERROR: ErrorVariant = ErrorVariant::builtin(
        "EchFallbackCertificateInvalidError",
        -184,
        ErrorType::Connection,
        "ECH was enabled, the server was unable to decrypt the encrypted ClientHello, and additionally did not present a certificate valid for the public name.",
        Some("ERR_ECH_FALLBACK_CERTIFICATE_INVALID"),
    );

    /// The server responded with a certificate whose common name did not match the host name. This could mean: 1. An attacker has redirected our traffic to their server and is presenting a certificate for which they know the private key. 2. The server is misconfigured and responding with the wrong cert. 3. The user is on a wireless network and is being redirected to the network's login page. 4. The OS has used a DNS search suffix and the server doesn't have a certificate for the abbreviated name in the address bar.
    pub const CERT_COMMON_NAME_INVALID_ERROR: ErrorVariant = ErrorVariant::builtin(
        "CertCommonNameInvalidError",
        -200,
        ErrorType::Certificate,
        "The server responded with a certificate whose common name did not match the host name. This could mean: 1. An attacker has redirected our traffic to their server and is presenting a certificate for which they know the private key. 2. The server is misconfigured and responding with the wrong cert. 3. The user is on a wireless network and is being redirected to the network's login page. 4. The OS has used a DNS search suffix and the server doesn't have a certificate for the abbreviated name in the address bar.",
        Some("ERR_CERT_COMMON_NAME_INVALID"),
    );

    /// The server responded with a certificate that, by our clock, appears to either not yet be valid or to have expired. This could mean: 1. An attacker is presenting an old certificate for which they have managed to obtain the private key. 2. The server is misconfigured and is not presenting a valid cert. 3. Our clock is wrong.
    pub const CERT_DATE_INVALID_ERROR: ErrorVariant = ErrorVariant::builtin(
        "CertDateInvalidError",
        -201,
        ErrorType::Certificate,
        "The server responded with a certificate that, by our clock, appears to either not yet be valid or to have expired. This could mean: 1. An attacker is presenting an old certificate for which they have managed to obtain the private key. 2. The server is misconfigured and is not presenting a valid cert. 3. Our clock is wrong.",
        Some("ERR_CERT_DATE_INVALID"),
    );

    /// The server responded with a certificate that is signed by an authority we don't trust. The could mean: 1. An attacker has substituted the real certificate for a cert that contains their public key and is signed by their cousin. 2. The server operator has a legitimate certificate from a CA we don't know about, but should trust. 3. The server is presenting a self-signed certificate, providing no defense against active attackers (but foiling passive attackers).
    pub const CERT_AUTHORITY_INVALID_ERROR: ErrorVariant = ErrorVariant::builtin(
        "CertAuthorityInvalidError",
        -202,
        ErrorType::Certificate,
        "The server responded with a certificate that is signed by an authority we don't trust. The could mean: 1. An attacker has substituted the real certificate for a cert that contains their public key and is signed by their cousin. 2. The server operator has a legitimate certificate from a CA we don't know about, but should trust. 3. The server is presenting a self-signed certificate, providing no defense against active attackers (but foiling passive attackers).",
        Some("ERR_CERT_AUTHORITY_INVALID"),
    );

    /// The server responded with a certificate that contains errors. This error is not recoverable. MSDN describes this error as follows: "The SSL certificate contains errors." NOTE: It's unclear how this differs from ERR_CERT_INVALID. For consistency, use that code instead of this one from now on.
    pub const CERT_CONTAINS_ERRORS_ERROR: ErrorVariant = ErrorVariant::builtin(
        "CertContainsErrorsError",
        -203,
        ErrorType::Certificate,
        "The server responded with a certificate that contains errors. This error is not recoverable. MSDN describes this error as follows: \"The SSL certificate contains errors.\" NOTE: It's unclear how this differs from ERR_CERT_INVALID. For consistency, use that code instead of this one from now on.",
        Some("ERR_CERT_CONTAINS_ERRORS"),
    );

    /// The certificate has no mechanism for determining if it is revoked. In effect, this certificate cannot be revoked.
    pub const CERT_NO_REVOCATION_MECHANISM_ERROR: ErrorVariant = ErrorVariant::builtin(
        "CertNoRevocationMechanismError",
        -204,
        ErrorType::Certificate,
        "The certificate has no mechanism for determining if it is revoked. In effect, this certificate cannot be revoked.",
        Some("ERR_CERT_NO_REVOCATION_MECHANISM"),
    );

    /// Revocation information for the security certificate for this site is not available. This could mean: 1. An attacker has compromised the private key in the certificate and is blocking our attempt to find out that the cert was revoked. 2. The certificate is unrevoked, but the revocation server is busy or unavailable.
    pub const CERT_UNABLE_TO_CHECK_REVOCATION_ERROR: ErrorVariant = ErrorVariant::builtin(
        "CertUnableToCheckRevocationError",
        -205,
        ErrorType::Certificate,
        "Revocation information for the security certificate for this site is not available. This could mean: 1. An attacker has compromised the private key in the certificate and is blocking our attempt to find out that the cert was revoked. 2. The certificate is unrevoked, but the revocation server is busy or unavailable.",
        Some("ERR_CERT_UNABLE_TO_CHECK_REVOCATION"),
    );

    /// The server responded with a certificate has been revoked. We have the capability to ignore this error, but it is probably not the thing to do.
    pub const CERT_REVOKED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "CertRevokedError",
        -206,
        ErrorType::Certificate,
        "The server responded with a certificate has been revoked. We have the capability to ignore this error, but it is probably not the thing to do.",
        Some("ERR_CERT_REVOKED"),
    );

    /// The server responded with a certificate that is invalid. This error is not recoverable. MSDN describes this error as follows: "The SSL certificate is invalid."
    pub const CERT_INVALID_ERROR: ErrorVariant = ErrorVariant::builtin(
        "CertInvalidError",
        -207,
        ErrorType::Certificate,
        "The server responded with a certificate that is invalid. This error is not recoverable. MSDN describes this error as follows: \"The SSL certificate is invalid.\"",
        Some("ERR_CERT_INVALID"),
    );

    /// The server responded with a certificate that is signed using a weak signature algorithm.
    pub const CERT_WEAK_SIGNATURE_ALGORITHM_ERROR: ErrorVariant = ErrorVariant::builtin(
        "CertWeakSignatureAlgorithmError",
        -208,
        ErrorType::Certificate,
        "The server responded with a certificate that is signed using a weak signature algorithm.",
        Some("ERR_CERT_WEAK_SIGNATURE_ALGORITHM"),
    );

    /// The host name specified in the certificate is not unique.
    pub const CERT_NON_UNIQUE_NAME_ERROR: ErrorVariant = ErrorVariant::builtin(
        "CertNonUniqueNameError",
        -210,
        ErrorType::Certificate,
        "The host name specified in the certificate is not unique.",
        Some("ERR_CERT_NON_UNIQUE_NAME"),
    );

    /// The server responded with a certificate that contains a weak key (e.g. a too-small RSA key).
    pub const CERT_WEAK_KEY_ERROR: ErrorVariant = ErrorVariant::builtin(
        "CertWeakKeyError",
        -211,
        ErrorType::Certificate,
        "The server responded with a certificate that contains a weak key (e.g. a too-small RSA key).",
        Some("ERR_CERT_WEAK_KEY"),
    );

    /// The certificate claimed DNS names that are in violation of name constraints.
    pub const CERT_NAME_CONSTRAINT_VIOLATION_ERROR: ErrorVariant = ErrorVariant::builtin(
        "CertNameConstraintViolationError",
        -212,
        ErrorType::Certificate,
        "The certificate claimed DNS names that are in violation of name constraints.",
        Some("ERR_CERT_NAME_CONSTRAINT_VIOLATION"),
    );

    /// The certificate's validity period is too long.
    pub const CERT_VALIDITY_TOO_LONG_ERROR: ErrorVariant = ErrorVariant::builtin(
        "CertValidityTooLongError",
        -213,
        ErrorType::Certificate,
        "The certificate's validity period is too long.",
        Some("ERR_CERT_VALIDITY_TOO_LONG"),
    );

    /// Certificate Transparency was required for this connection, but the server did not provide CT information that complied with the policy.
    pub const CERTIFICATE_TRANSPARENCY_REQUIRED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "CertificateTransparencyRequiredError",
        -214,
        ErrorType::Certificate,
        "Certificate Transparency was required for this connection, but the server did not provide CT information that complied with the policy.",
        Some("ERR_CERTIFICATE_TRANSPARENCY_REQUIRED"),
    );

    /// The certificate chained to a legacy Symantec root that is no longer trusted.
    pub const CERT_SYMANTEC_LEGACY_ERROR: ErrorVariant = ErrorVariant::builtin(
        "CertSymantecLegacyError",
        -215,
        ErrorType::Certificate,
        "The certificate chained to a legacy Symantec root that is no longer trusted.",
        Some("ERR_CERT_SYMANTEC_LEGACY"),
    );

    /// The certificate is known to be used for interception by an entity other the device owner.
    pub const CERT_KNOWN_INTERCEPTION_BLOCKED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "CertKnownInterceptionBlockedError",
        -217,
        ErrorType::Certificate,
        "The certificate is known to be used for interception by an entity other the device owner.",
        Some("ERR_CERT_KNOWN_INTERCEPTION_BLOCKED"),
    );

    /// The value immediately past the last certificate error code.
    pub const CERT_END_ERROR: ErrorVariant = ErrorVariant::builtin(
        "CertEndError",
        -219,
        ErrorType::Certificate,
        "The value immediately past the last certificate error code.",
        Some("ERR_CERT_END"),
    );

    /// The URL is invalid.
    pub const INVALID_URL_ERROR: ErrorVariant = ErrorVariant::builtin(
        "InvalidUrlError",
        -300,
        ErrorType::Http,
        "The URL is invalid.",
        Some("ERR_INVALID_URL"),
    );

    /// The scheme of the URL is disallowed.
    pub const DISALLOWED_URL_SCHEME_ERROR: ErrorVariant = ErrorVariant::builtin(
        "DisallowedUrlSchemeError",
        -301,
        ErrorType::Http,
        "The scheme of the URL is disallowed.",
        Some("ERR_DISALLOWED_URL_SCHEME"),
    );

    /// The scheme of the URL is unknown.
    pub const UNKNOWN_URL_SCHEME_ERROR: ErrorVariant = ErrorVariant::builtin(
        "UnknownUrlSchemeError",
        -302,
        ErrorType::Http,
        "The scheme of the URL is unknown.",
        Some("ERR_UNKNOWN_URL_SCHEME"),
    );

    /// Attempting to load an URL resulted in a redirect to an invalid URL.
    pub const INVALID_REDIRECT_ERROR: ErrorVariant = ErrorVariant::builtin(
        "InvalidRedirectError",
        -303,
        ErrorType::Http,
        "Attempting to load an URL resulted in a redirect to an invalid URL.",
        Some("ERR_INVALID_REDIRECT"),
    );

    /// Attempting to load an URL resulted in too many redirects.
    pub const TOO_MANY_REDIRECTS_ERROR: ErrorVariant = ErrorVariant::builtin(
        "TooManyRedirectsError",
        -310,
        ErrorType::Http,
        "Attempting to load an URL resulted in too many redirects.",
        Some("ERR_TOO_MANY_REDIRECTS"),
    );

    /// Attempting to load an URL resulted in an unsafe redirect (e.g., a redirect to file:// is considered unsafe).
    pub const UNSAFE_REDIRECT_ERROR: ErrorVariant = ErrorVariant::builtin(
        "UnsafeRedirectError",
        -311,
        ErrorType::Http,
        "Attempting to load an URL resulted in an unsafe redirect (e.g., a redirect to file:// is considered unsafe).",
        Some("ERR_UNSAFE_REDIRECT"),
    );

    /// Attempting to load an URL with an unsafe port number. These are port numbers that correspond to services, which are not robust to spurious input that may be constructed as a result of an allowed web construct (e.g., HTTP looks a lot like SMTP, so form submission to port 25 is denied).
    pub const UNSAFE_PORT_ERROR: ErrorVariant = ErrorVariant::builtin(
        "UnsafePortError",
        -312,
        ErrorType::Http,
        "Attempting to load an URL with an unsafe port number. These are port numbers that correspond to services, which are not robust to spurious input that may be constructed as a result of an allowed web construct (e.g., HTTP looks a lot like SMTP, so form submission to port 25 is denied).",
        Some("ERR_UNSAFE_PORT"),
    );

    /// The server's response was invalid.
    pub const INVALID_RESPONSE_ERROR: ErrorVariant = ErrorVariant::builtin(
        "InvalidResponseError",
        -320,
        ErrorType::Http,
        "The server's response was invalid.",
        Some("ERR_INVALID_RESPONSE"),
    );

    /// Error in chunked transfer encoding.
    pub const INVALID_CHUNKED_ENCODING_ERROR: ErrorVariant = ErrorVariant::builtin(
        "InvalidChunkedEncodingError",
        -321,
        ErrorType::Http,
        "Error in chunked transfer encoding.",
        Some("ERR_INVALID_CHUNKED_ENCODING"),
    );

    /// The server did not support the request method.
    pub const METHOD_NOT_SUPPORTED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "MethodNotSupportedError",
        -322,
        ErrorType::Http,
        "The server did not support the request method.",
        Some("ERR_METHOD_NOT_SUPPORTED"),
    );

    /// The response was 407 (Proxy Authentication Required), yet we did not send the request to a proxy.
    pub const UNEXPECTED_PROXY_AUTH_ERROR: ErrorVariant = ErrorVariant::builtin(
        "UnexpectedProxyAuthError",
        -323,
        ErrorType::Http,
        "The response was 407 (Proxy Authentication Required), yet we did not send the request to a proxy.",
        Some("ERR_UNEXPECTED_PROXY_AUTH"),
    );

    /// The server closed the connection without sending any data.
    pub const EMPTY_RESPONSE_ERROR: ErrorVariant = ErrorVariant::builtin(
        "EmptyResponseError",
        -324,
        ErrorType::Http,
        "The server closed the connection without sending any data.",
        Some("ERR_EMPTY_RESPONSE"),
    );

    /// The headers section of the response is too large.
    pub const RESPONSE_HEADERS_TOO_BIG_ERROR: ErrorVariant = ErrorVariant::builtin(
        "ResponseHeadersTooBigError",
        -325,
        ErrorType::Http,
        "The headers section of the response is too large.",
        Some("ERR_RESPONSE_HEADERS_TOO_BIG"),
    );

    /// Evaluation of the PAC script failed.
    pub const PAC_SCRIPT_FAILED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "PacScriptFailedError",
        -327,
        ErrorType::Http,
        "Evaluation of the PAC script failed.",
        Some("ERR_PAC_SCRIPT_FAILED"),
    );

    /// The response was 416 (Requested range not satisfiable) and the server cannot satisfy the range requested.
    pub const REQUEST_RANGE_NOT_SATISFIABLE_ERROR: ErrorVariant = ErrorVariant::builtin(
        "RequestRangeNotSatisfiableError",
        -328,
        ErrorType::Http,
        "The response was 416 (Requested range not satisfiable) and the server cannot satisfy the range requested.",
        Some("ERR_REQUEST_RANGE_NOT_SATISFIABLE"),
    );

    /// The identity used for authentication is invalid.
    pub const MALFORMED_IDENTITY_ERROR: ErrorVariant = ErrorVariant::builtin(
        "MalformedIdentityError",
        -329,
        ErrorType::Http,
        "The identity used for authentication is invalid.",
        Some("ERR_MALFORMED_IDENTITY"),
    );

    /// Content decoding of the response body failed.
    pub const CONTENT_DECODING_FAILED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "ContentDecodingFailedError",
        -330,
        ErrorType::Http,
        "Content decoding of the response body failed.",
        Some("ERR_CONTENT_DECODING_FAILED"),
    );

    /// An operation could not be completed because all network IO is suspended.
    pub const NETWORK_IO_SUSPENDED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "NetworkIoSuspendedError",
        -331,
        ErrorType::Http,
        "An operation could not be completed because all network IO is suspended.",
        Some("ERR_NETWORK_IO_SUSPENDED"),
    );

    /// FLIP data received without receiving a SYN_REPLY on the stream.
    pub const SYN_REPLY_NOT_RECEIVED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "SynReplyNotReceivedError",
        -332,
        ErrorType::Http,
        "FLIP data received without receiving a SYN_REPLY on the stream.",
        Some("ERR_SYN_REPLY_NOT_RECEIVED"),
    );

    /// Converting the response to target encoding failed.
    pub const ENCODING_CONVERSION_FAILED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "EncodingConversionFailedError",
        -333,
        ErrorType::Http,
        "Converting the response to target encoding failed.",
        Some("ERR_ENCODING_CONVERSION_FAILED"),
    );

    /// The server sent an FTP directory listing in a format we do not understand.
    pub const UNRECOGNIZED_FTP_DIRECTORY_LISTING_FORMAT_ERROR: ErrorVariant = ErrorVariant::builtin(
        "UnrecognizedFtpDirectoryListingFormatError",
        -334,
        ErrorType::Http,
        "The server sent an FTP directory listing in a format we do not understand.",
        Some("ERR_UNRECOGNIZED_FTP_DIRECTORY_LISTING_FORMAT"),
    );

    /// There are no supported proxies in the provided list.
    pub const NO_SUPPORTED_PROXIES_ERROR: ErrorVariant = ErrorVariant::builtin(
        "NoSupportedProxiesError",
        -336,
        ErrorType::Http,
        "There are no supported proxies in the provided list.",
        Some("ERR_NO_SUPPORTED_PROXIES"),
    );

    /// There is an HTTP/2 protocol error.
    pub const HTTP2_PROTOCOL_ERROR: ErrorVariant = ErrorVariant::builtin(
        "Http2ProtocolError",
        -337,
        ErrorType::Http,
        "There is an HTTP/2 protocol error.",
        Some("ERR_HTTP2_PROTOCOL_ERROR"),
    );

    /// Credentials could not be established during HTTP Authentication.
    pub const INVALID_AUTH_CREDENTIALS_ERROR: ErrorVariant = ErrorVariant::builtin(
        "InvalidAuthCredentialsError",
        -338,
        ErrorType::Http,
        "Credentials could not be established during HTTP Authentication.",
        Some("ERR_INVALID_AUTH_CREDENTIALS"),
    );

    /// An HTTP Authentication scheme was tried which is not supported on this machine.
    pub const UNSUPPORTED_AUTH_SCHEME_ERROR: ErrorVariant = ErrorVariant::builtin(
        "UnsupportedAuthSchemeError",
        -339,
        ErrorType::Http,
        "An HTTP Authentication scheme was tried which is not supported on this machine.",
        Some("ERR_UNSUPPORTED_AUTH_SCHEME"),
    );

    /// Detecting the encoding of the response failed.
    pub const ENCODING_DETECTION_FAILED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "EncodingDetectionFailedError",
        -340,
        ErrorType::Http,
        "Detecting the encoding of the response failed.",
        Some("ERR_ENCODING_DETECTION_FAILED"),
    );

    /// (GSSAPI) No Kerberos credentials were available during HTTP Authentication.
    pub const MISSING_AUTH_CREDENTIALS_ERROR: ErrorVariant = ErrorVariant::builtin(
        "MissingAuthCredentialsError",
        -341,
        ErrorType::Http,
        "(GSSAPI) No Kerberos credentials were available during HTTP Authentication.",
        Some("ERR_MISSING_AUTH_CREDENTIALS"),
    );

    /// An unexpected, but documented, SSPI or GSSAPI status code was returned.
    pub const UNEXPECTED_SECURITY_LIBRARY_STATUS_ERROR: ErrorVariant = ErrorVariant::builtin(
        "UnexpectedSecurityLibraryStatusError",
        -342,
        ErrorType::Http,
        "An unexpected, but documented, SSPI or GSSAPI status code was returned.",
        Some("ERR_UNEXPECTED_SECURITY_LIBRARY_STATUS"),
    );

    /// The environment was not set up correctly for authentication (for example, no KDC could be found or the principal is unknown.
    pub const MISCONFIGURED_AUTH_ENVIRONMENT_ERROR: ErrorVariant = ErrorVariant::builtin(
        "MisconfiguredAuthEnvironmentError",
        -343,
        ErrorType::Http,
        "The environment was not set up correctly for authentication (for example, no KDC could be found or the principal is unknown.",
        Some("ERR_MISCONFIGURED_AUTH_ENVIRONMENT"),
    );

    /// An undocumented SSPI or GSSAPI status code was returned.
    pub const UNDOCUMENTED_SECURITY_LIBRARY_STATUS_ERROR: ErrorVariant = ErrorVariant::builtin(
        "UndocumentedSecurityLibraryStatusError",
        -344,
        ErrorType::Http,
        "An undocumented SSPI or GSSAPI status code was returned.",
        Some("ERR_UNDOCUMENTED_SECURITY_LIBRARY_STATUS"),
    );

    /// The HTTP response was too big to drain.
    pub const RESPONSE_BODY_TOO_BIG_TO_DRAIN_ERROR: ErrorVariant = ErrorVariant::builtin(
        "ResponseBodyTooBigToDrainError",
        -345,
        ErrorType::Http,
        "The HTTP response was too big to drain.",
        Some("ERR_RESPONSE_BODY_TOO_BIG_TO_DRAIN"),
    );

    /// The HTTP response contained multiple distinct Content-Length headers.
    pub const RESPONSE_HEADERS_MULTIPLE_CONTENT_LENGTH_ERROR: ErrorVariant = ErrorVariant::builtin(
        "ResponseHeadersMultipleContentLengthError",
        -346,
        ErrorType::Http,
        "The HTTP response contained multiple distinct Content-Length headers.",
        Some("ERR_RESPONSE_HEADERS_MULTIPLE_CONTENT_LENGTH"),
    );

    /// HTTP/2 headers have been received, but not all of them - status or version headers are missing, so we're expecting additional frames to complete them.
    pub const INCOMPLETE_HTTP2_HEADERS_ERROR: ErrorVariant = ErrorVariant::builtin(
        "IncompleteHttp2HeadersError",
        -347,
        ErrorType::Http,
        "HTTP/2 headers have been received, but not all of them - status or version headers are missing, so we're expecting additional frames to complete them.",
        Some("ERR_INCOMPLETE_HTTP2_HEADERS"),
    );

    /// No PAC URL configuration could be retrieved from DHCP. This can indicate either a failure to retrieve the DHCP configuration, or that there was no PAC URL configured in DHCP.
    pub const PAC_NOT_IN_DHCP_ERROR: ErrorVariant = ErrorVariant::builtin(
        "PacNotInDhcpError",
        -348,
        ErrorType::Http,
        "No PAC URL configuration could be retrieved from DHCP. This can indicate either a failure to retrieve the DHCP configuration, or that there was no PAC URL configured in DHCP.",
        Some("ERR_PAC_NOT_IN_DHCP"),
    );

    /// The HTTP response contained multiple Content-Disposition headers.
    pub const RESPONSE_HEADERS_MULTIPLE_CONTENT_DISPOSITION_ERROR: ErrorVariant = ErrorVariant::builtin(
        "ResponseHeadersMultipleContentDispositionError",
        -349,
        ErrorType::Http,
        "The HTTP response contained multiple Content-Disposition headers.",
        Some("ERR_RESPONSE_HEADERS_MULTIPLE_CONTENT_DISPOSITION"),
    );

    /// The HTTP response contained multiple Location headers.
    pub const RESPONSE_HEADERS_MULTIPLE_LOCATION_ERROR: ErrorVariant = ErrorVariant::builtin(
        "ResponseHeadersMultipleLocationError",
        -350,
        ErrorType::Http,
        "The HTTP response contained multiple Location headers.",
        Some("ERR_RESPONSE_HEADERS_MULTIPLE_LOCATION"),
    );

    /// HTTP/2 server refused the request without processing, and sent either a GOAWAY frame with error code NO_ERROR and Last-Stream-ID lower than the stream id corresponding to the request indicating that this request has not been processed yet, or a RST_STREAM frame with error code REFUSED_STREAM. Client MAY retry (on a different connection). See RFC7540 Section 8.1.4.
    pub const HTTP2_SERVER_REFUSED_STREAM_ERROR: ErrorVariant = ErrorVariant::builtin(
        "Http2ServerRefusedStreamError",
        -351,
        ErrorType::Http,
        "HTTP/2 server refused the request without processing, and sent either a GOAWAY frame with error code NO_ERROR and Last-Stream-ID lower than the stream id corresponding to the request indicating that this request has not been processed yet, or a RST_STREAM frame with error code REFUSED_STREAM. Client MAY retry (on a different connection). See RFC7540 Section 8.1.4.",
        Some("ERR_HTTP2_SERVER_REFUSED_STREAM"),
    );

    /// HTTP/2 server didn't respond to the PING message.
    pub const HTTP2_PING_FAILED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "Http2PingFailedError",
        -352,
        ErrorType::Http,
        "HTTP/2 server didn't respond to the PING message.",
        Some("ERR_HTTP2_PING_FAILED"),
    );

    /// The HTTP response body transferred fewer bytes than were advertised by the Content-Length header when the connection is closed.
    pub const CONTENT_LENGTH_MISMATCH_ERROR: ErrorVariant = ErrorVariant::builtin(
        "ContentLengthMismatchError",
        -354,
        ErrorType::Http,
        "The HTTP response body transferred fewer bytes than were advertised by the Content-Length header when the connection is closed.",
        Some("ERR_CONTENT_LENGTH_MISMATCH"),
    );

    /// The HTTP response body is transferred with Chunked-Encoding, but the terminating zero-length chunk was never sent when the connection is closed.
    pub const INCOMPLETE_CHUNKED_ENCODING_ERROR: ErrorVariant = ErrorVariant::builtin(
        "IncompleteChunkedEncodingError",
        -355,
        ErrorType::Http,
        "The HTTP response body is transferred with Chunked-Encoding, but the terminating zero-length chunk was never sent when the connection is closed.",
        Some("ERR_INCOMPLETE_CHUNKED_ENCODING"),
    );

    /// There is a QUIC protocol error.
    pub const QUIC_PROTOCOL_ERROR: ErrorVariant = ErrorVariant::builtin(
        "QuicProtocolError",
        -356,
        ErrorType::Http,
        "There is a QUIC protocol error.",
        Some("ERR_QUIC_PROTOCOL_ERROR"),
    );

    /// The HTTP headers were truncated by an EOF.
    pub const RESPONSE_HEADERS_TRUNCATED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "ResponseHeadersTruncatedError",
        -357,
        ErrorType::Http,
        "The HTTP headers were truncated by an EOF.",
        Some("ERR_RESPONSE_HEADERS_TRUNCATED"),
    );

    /// The QUIC crypto handshake failed. This means that the server was unable to read any requests sent, so they may be resent.
    pub const QUIC_HANDSHAKE_FAILED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "QuicHandshakeFailedError",
        -358,
        ErrorType::Http,
        "The QUIC crypto handshake failed. This means that the server was unable to read any requests sent, so they may be resent.",
        Some("ERR_QUIC_HANDSHAKE_FAILED"),
    );

    /// Transport security is inadequate for the HTTP/2 version.
    pub const HTTP2_INADEQUATE_TRANSPORT_SECURITY_ERROR: ErrorVariant = ErrorVariant::builtin(
        "Http2InadequateTransportSecurityError",
        -360,
        ErrorType::Http,
        "Transport security is inadequate for the HTTP/2 version.",
        Some("ERR_HTTP2_INADEQUATE_TRANSPORT_SECURITY"),
    );

    /// The peer violated HTTP/2 flow control.
    pub const HTTP2_FLOW_CONTROL_ERROR: ErrorVariant = ErrorVariant::builtin(
        "Http2FlowControlError",
        -361,
        ErrorType::Http,
        "The peer violated HTTP/2 flow control.",
        Some("ERR_HTTP2_FLOW_CONTROL_ERROR"),
    );

    /// The peer sent an improperly sized HTTP/2 frame.
    pub const HTTP2_FRAME_SIZE_ERROR: ErrorVariant = ErrorVariant::builtin(
        "Http2FrameSizeError",
        -362,
        ErrorType::Http,
        "The peer sent an improperly sized HTTP/2 frame.",
        Some("ERR_HTTP2_FRAME_SIZE_ERROR"),
    );

    /// Decoding or encoding of compressed HTTP/2 headers failed.
    pub const HTTP2_COMPRESSION_ERROR: ErrorVariant = ErrorVariant::builtin(
        "Http2CompressionError",
        -363,
        ErrorType::Http,
        "Decoding or encoding of compressed HTTP/2 headers failed.",
        Some("ERR_HTTP2_COMPRESSION_ERROR"),
    );

    /// Proxy Auth Requested without a valid Client Socket Handle.
    pub const PROXY_AUTH_REQUESTED_WITH_NO_CONNECTION_ERROR: ErrorVariant = ErrorVariant::builtin(
        "ProxyAuthRequestedWithNoConnectionError",
        -364,
        ErrorType::Http,
        "Proxy Auth Requested without a valid Client Socket Handle.",
        Some("ERR_PROXY_AUTH_REQUESTED_WITH_NO_CONNECTION"),
    );

    /// HTTP_1_1_REQUIRED error code received on HTTP/2 session.
    pub const HTTP11_REQUIRED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "Http11RequiredError",
        -365,
        ErrorType::Http,
        "HTTP_1_1_REQUIRED error code received on HTTP/2 session.",
        Some("ERR_HTTP_1_1_REQUIRED"),
    );

    /// HTTP_1_1_REQUIRED error code received on HTTP/2 session to proxy.
    pub const PROXY_HTTP11_REQUIRED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "ProxyHttp11RequiredError",
        -366,
        ErrorType::Http,
        "HTTP_1_1_REQUIRED error code received on HTTP/2 session to proxy.",
        Some("ERR_PROXY_HTTP_1_1_REQUIRED"),
    );

    /// The PAC script terminated fatally and must be reloaded.
    pub const PAC_SCRIPT_TERMINATED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "PacScriptTerminatedError",
        -367,
        ErrorType::Http,
        "The PAC script terminated fatally and must be reloaded.",
        Some("ERR_PAC_SCRIPT_TERMINATED"),
    );

    /// The server was expected to return an HTTP/1.x response, but did not. Rather than treat it as HTTP/0.9, this error is returned.
    pub const INVALID_HTTP_RESPONSE_ERROR: ErrorVariant = ErrorVariant::builtin(
        "InvalidHttpResponseError",
        -370,
        ErrorType::Http,
        "The server was expected to return an HTTP/1.x response, but did not. Rather than treat it as HTTP/0.9, this error is returned.",
        Some("ERR_INVALID_HTTP_RESPONSE"),
    );

    /// Initializing content decoding failed.
    pub const CONTENT_DECODING_INIT_FAILED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "ContentDecodingInitFailedError",
        -371,
        ErrorType::Http,
        "Initializing content decoding failed.",
        Some("ERR_CONTENT_DECODING_INIT_FAILED"),
    );

    /// Received HTTP/2 RST_STREAM frame with NO_ERROR error code. This error should be handled internally by HTTP/2 code, and should not make it above the SpdyStream layer.
    pub const HTTP2_RST_STREAM_NO_ERROR_RECEIVED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "Http2RstStreamNoErrorReceivedError",
        -372,
        ErrorType::Http,
        "Received HTTP/2 RST_STREAM frame with NO_ERROR error code. This error should be handled internally by HTTP/2 code, and should not make it above the SpdyStream layer.",
        Some("ERR_HTTP2_RST_STREAM_NO_ERROR_RECEIVED"),
    );

    /// The request couldn't be completed because of too many retries.
    pub const TOO_MANY_RETRIES_ERROR: ErrorVariant = ErrorVariant::builtin(
        "TooManyRetriesError",
        -375,
        ErrorType::Http,
        "The request couldn't be completed because of too many retries.",
        Some("ERR_TOO_MANY_RETRIES"),
    );

    /// Received an HTTP/2 frame on a closed stream.
    pub const HTTP2_STREAM_CLOSED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "Http2StreamClosedError",
        -376,
        ErrorType::Http,
        "Received an HTTP/2 frame on a closed stream.",
        Some("ERR_HTTP2_STREAM_CLOSED"),
    );

    /// The server returned a non-2xx HTTP response code. Note that this error is only used by certain APIs that interpret the HTTP response itself. URLRequest for instance just passes most non-2xx response back as success.
    pub const HTTP_RESPONSE_CODE_FAILURE_ERROR: ErrorVariant = ErrorVariant::builtin(
        "HttpResponseCodeFailureError",
        -379,
        ErrorType::Http,
        "The server returned a non-2xx HTTP response code. Note that this error is only used by certain APIs that interpret the HTTP response itself. URLRequest for instance just passes most non-2xx response back as success.",
        Some("ERR_HTTP_RESPONSE_CODE_FAILURE"),
    );

    /// The certificate presented on a QUIC connection does not chain to a known root and the origin connected to is not on a list of domains where unknown roots are allowed.
    pub const QUIC_CERT_ROOT_NOT_KNOWN_ERROR: ErrorVariant = ErrorVariant::builtin(
        "QuicCertRootNotKnownError",
        -380,
        ErrorType::Http,
        "The certificate presented on a QUIC connection does not chain to a known root and the origin connected to is not on a list of domains where unknown roots are allowed.",
        Some("ERR_QUIC_CERT_ROOT_NOT_KNOWN"),
    );

    /// A GOAWAY frame has been received indicating that the request has not been processed and is therefore safe to retry on a different connection.
    pub const QUIC_GOAWAY_REQUEST_CAN_BE_RETRIED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "QuicGoawayRequestCanBeRetriedError",
        -381,
        ErrorType::Http,
        "A GOAWAY frame has been received indicating that the request has not been processed and is therefore safe to retry on a different connection.",
        Some("ERR_QUIC_GOAWAY_REQUEST_CAN_BE_RETRIED"),
    );

    /// The ACCEPT_CH restart has been triggered too many times
    pub const TOO_MANY_ACCEPT_CH_RESTARTS_ERROR: ErrorVariant = ErrorVariant::builtin(
        "TooManyAcceptChRestartsError",
        -382,
        ErrorType::Http,
        "The ACCEPT_CH restart has been triggered too many times",
        Some("ERR_TOO_MANY_ACCEPT_CH_RESTARTS"),
    );

    /// The IP address space of the remote endpoint differed from the previous observed value during the same request. Any cache entry for the affected request should be invalidated.
    pub const INCONSISTENT_IP_ADDRESS_SPACE_ERROR: ErrorVariant = ErrorVariant::builtin(
        "InconsistentIpAddressSpaceError",
        -383,
        ErrorType::Http,
        "The IP address space of the remote endpoint differed from the previous observed value during the same request. Any cache entry for the affected request should be invalidated.",
        Some("ERR_INCONSISTENT_IP_ADDRESS_SPACE"),
    );

    /// The cache does not have the requested entry.
    pub const CACHE_MISS_ERROR: ErrorVariant = ErrorVariant::builtin(
        "CacheMissError",
        -400,
        ErrorType::Cache,
        "The cache does not have the requested entry.",
        Some("ERR_CACHE_MISS"),
    );

    /// Unable to read from the disk cache.
    pub const CACHE_READ_FAILURE_ERROR: ErrorVariant = ErrorVariant::builtin(
        "CacheReadFailureError",
        -401,
        ErrorType::Cache,
        "Unable to read from the disk cache.",
        Some("ERR_CACHE_READ_FAILURE"),
    );

    /// Unable to write to the disk cache.
    pub const CACHE_WRITE_FAILURE_ERROR: ErrorVariant = ErrorVariant::builtin(
        "CacheWriteFailureError",
        -402,
        ErrorType::Cache,
        "Unable to write to the disk cache.",
        Some("ERR_CACHE_WRITE_FAILURE"),
    );

    /// The operation is not supported for this entry.
    pub const CACHE_OPERATION_NOT_SUPPORTED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "CacheOperationNotSupportedError",
        -403,
        ErrorType::Cache,
        "The operation is not supported for this entry.",
        Some("ERR_CACHE_OPERATION_NOT_SUPPORTED"),
    );

    /// The disk cache is unable to open this entry.
    pub const CACHE_OPEN_FAILURE_ERROR: ErrorVariant = ErrorVariant::builtin(
        "CacheOpenFailureError",
        -404,
        ErrorType::Cache,
        "The disk cache is unable to open this entry.",
        Some("ERR_CACHE_OPEN_FAILURE"),
    );

    /// The disk cache is unable to create this entry.
    pub const CACHE_CREATE_FAILURE_ERROR: ErrorVariant = ErrorVariant::builtin(
        "CacheCreateFailureError",
        -405,
        ErrorType::Cache,
        "The disk cache is unable to create this entry.",
        Some("ERR_CACHE_CREATE_FAILURE"),
    );

    /// Multiple transactions are racing to create disk cache entries. This is an internal error returned from the HttpCache to the HttpCacheTransaction that tells the transaction to restart the entry-creation logic because the state of the cache has changed.
    pub const CACHE_RACE_ERROR: ErrorVariant = ErrorVariant::builtin(
        "CacheRaceError",
        -406,
        ErrorType::Cache,
        "Multiple transactions are racing to create disk cache entries. This is an internal error returned from the HttpCache to the HttpCacheTransaction that tells the transaction to restart the entry-creation logic because the state of the cache has changed.",
        Some("ERR_CACHE_RACE"),
    );

    /// The cache was unable to read a checksum record on an entry. This can be returned from attempts to read from the cache. It is an internal error, returned by the SimpleCache backend, but not by any URLRequest methods or members.
    pub const CACHE_CHECKSUM_READ_FAILURE_ERROR: ErrorVariant = ErrorVariant::builtin(
        "CacheChecksumReadFailureError",
        -407,
        ErrorType::Cache,
        "The cache was unable to read a checksum record on an entry. This can be returned from attempts to read from the cache. It is an internal error, returned by the SimpleCache backend, but not by any URLRequest methods or members.",
        Some("ERR_CACHE_CHECKSUM_READ_FAILURE"),
    );

    /// The cache found an entry with an invalid checksum. This can be returned from attempts to read from the cache. It is an internal error, returned by the SimpleCache backend, but not by any URLRequest methods or members.
    pub const CACHE_CHECKSUM_MISMATCH_ERROR: ErrorVariant = ErrorVariant::builtin(
        "CacheChecksumMismatchError",
        -408,
        ErrorType::Cache,
        "The cache found an entry with an invalid checksum. This can be returned from attempts to read from the cache. It is an internal error, returned by the SimpleCache backend, but not by any URLRequest methods or members.",
        Some("ERR_CACHE_CHECKSUM_MISMATCH"),
    );

    /// Internal error code for the HTTP cache. The cache lock timeout has fired.
    pub const CACHE_LOCK_TIMEOUT_ERROR: ErrorVariant = ErrorVariant::builtin(
        "CacheLockTimeoutError",
        -409,
        ErrorType::Cache,
        "Internal error code for the HTTP cache. The cache lock timeout has fired.",
        Some("ERR_CACHE_LOCK_TIMEOUT"),
    );

    /// Received a challenge after the transaction has read some data, and the credentials aren't available. There isn't a way to get them at that point.
    pub const CACHE_AUTH_FAILURE_AFTER_READ_ERROR: ErrorVariant = ErrorVariant::builtin(
        "CacheAuthFailureAfterReadError",
        -410,
        ErrorType::Cache,
        "Received a challenge after the transaction has read some data, and the credentials aren't available. There isn't a way to get them at that point.",
        Some("ERR_CACHE_AUTH_FAILURE_AFTER_READ"),
    );

    /// Internal not-quite error code for the HTTP cache. In-memory hints suggest that the cache entry would not have been usable with the transaction's current configuration (e.g. load flags, mode, etc.)
    pub const CACHE_ENTRY_NOT_SUITABLE_ERROR: ErrorVariant = ErrorVariant::builtin(
        "CacheEntryNotSuitableError",
        -411,
        ErrorType::Cache,
        "Internal not-quite error code for the HTTP cache. In-memory hints suggest that the cache entry would not have been usable with the transaction's current configuration (e.g. load flags, mode, etc.)",
        Some("ERR_CACHE_ENTRY_NOT_SUITABLE"),
    );

    /// The disk cache is unable to doom this entry.
    pub const CACHE_DOOM_FAILURE_ERROR: ErrorVariant = ErrorVariant::builtin(
        "CacheDoomFailureError",
        -412,
        ErrorType::Cache,
        "The disk cache is unable to doom this entry.",
        Some("ERR_CACHE_DOOM_FAILURE"),
    );

    /// The disk cache is unable to open or create this entry.
    pub const CACHE_OPEN_OR_CREATE_FAILURE_ERROR: ErrorVariant = ErrorVariant::builtin(
        "CacheOpenOrCreateFailureError",
        -413,
        ErrorType::Cache,
        "The disk cache is unable to open or create this entry.",
        Some("ERR_CACHE_OPEN_OR_CREATE_FAILURE"),
    );

    /// The server's response was insecure (e.g. there was a cert error).
    pub const INSECURE_RESPONSE_ERROR: ErrorVariant = ErrorVariant::builtin(
        "InsecureResponseError",
        -501,
        ErrorType::Unknown,
        "The server's response was insecure (e.g. there was a cert error).",
        Some("ERR_INSECURE_RESPONSE"),
    );

    /// An attempt to import a client certificate failed, as the user's key database lacked a corresponding private key.
    pub const NO_PRIVATE_KEY_FOR_CERT_ERROR: ErrorVariant = ErrorVariant::builtin(
        "NoPrivateKeyForCertError",
        -502,
        ErrorType::Unknown,
        "An attempt to import a client certificate failed, as the user's key database lacked a corresponding private key.",
        Some("ERR_NO_PRIVATE_KEY_FOR_CERT"),
    );

    /// An error adding a certificate to the OS certificate database.
    pub const ADD_USER_CERT_FAILED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "AddUserCertFailedError",
        -503,
        ErrorType::Unknown,
        "An error adding a certificate to the OS certificate database.",
        Some("ERR_ADD_USER_CERT_FAILED"),
    );

    /// An error occurred while handling a signed exchange.
    pub const INVALID_SIGNED_EXCHANGE_ERROR: ErrorVariant = ErrorVariant::builtin(
        "InvalidSignedExchangeError",
        -504,
        ErrorType::Unknown,
        "An error occurred while handling a signed exchange.",
        Some("ERR_INVALID_SIGNED_EXCHANGE"),
    );

    /// An error occurred while handling a Web Bundle source.
    pub const INVALID_WEB_BUNDLE_ERROR: ErrorVariant = ErrorVariant::builtin(
        "InvalidWebBundleError",
        -505,
        ErrorType::Unknown,
        "An error occurred while handling a Web Bundle source.",
        Some("ERR_INVALID_WEB_BUNDLE"),
    );

    /// A Trust Tokens protocol operation-executing request failed for one of a number of reasons (precondition failure, internal error, bad response).
    pub const TRUST_TOKEN_OPERATION_FAILED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "TrustTokenOperationFailedError",
        -506,
        ErrorType::Unknown,
        "A Trust Tokens protocol operation-executing request failed for one of a number of reasons (precondition failure, internal error, bad response).",
        Some("ERR_TRUST_TOKEN_OPERATION_FAILED"),
    );

    /// When handling a Trust Tokens protocol operation-executing request, the system was able to execute the request's Trust Tokens operation without sending the request to its destination: for instance, the results could have been present in a local cache (for redemption) or the operation could have been diverted to a local provider (for "platform-provided" issuance).
    pub const TRUST_TOKEN_OPERATION_SUCCESS_WITHOUT_SENDING_REQUEST_ERROR: ErrorVariant = ErrorVariant::builtin(
        "TrustTokenOperationSuccessWithoutSendingRequestError",
        -507,
        ErrorType::Unknown,
        "When handling a Trust Tokens protocol operation-executing request, the system was able to execute the request's Trust Tokens operation without sending the request to its destination: for instance, the results could have been present in a local cache (for redemption) or the operation could have been diverted to a local provider (for \"platform-provided\" issuance).",
        Some("ERR_TRUST_TOKEN_OPERATION_SUCCESS_WITHOUT_SENDING_REQUEST"),
    );

    /// A generic error for failed FTP control connection command. If possible, please use or add a more specific error code.
    pub const FTP_FAILED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "FtpFailedError",
        -601,
        ErrorType::Ftp,
        "A generic error for failed FTP control connection command. If possible, please use or add a more specific error code.",
        Some("ERR_FTP_FAILED"),
    );

    /// The server cannot fulfill the request at this point. This is a temporary error. FTP response code 421.
    pub const FTP_SERVICE_UNAVAILABLE_ERROR: ErrorVariant = ErrorVariant::builtin(
        "FtpServiceUnavailableError",
        -602,
        ErrorType::Ftp,
        "The server cannot fulfill the request at this point. This is a temporary error. FTP response code 421.",
        Some("ERR_FTP_SERVICE_UNAVAILABLE"),
    );

    /// The server has aborted the transfer. FTP response code 426.
    pub const FTP_TRANSFER_ABORTED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "FtpTransferAbortedError",
        -603,
        ErrorType::Ftp,
        "The server has aborted the transfer. FTP response code 426.",
        Some("ERR_FTP_TRANSFER_ABORTED"),
    );

    /// The file is busy, or some other temporary error condition on opening the file. FTP response code 450.
    pub const FTP_FILE_BUSY_ERROR: ErrorVariant = ErrorVariant::builtin(
        "FtpFileBusyError",
        -604,
        ErrorType::Ftp,
        "The file is busy, or some other temporary error condition on opening the file. FTP response code 450.",
        Some("ERR_FTP_FILE_BUSY"),
    );

    /// Server rejected our command because of syntax errors. FTP response codes 500, 501.
    pub const FTP_SYNTAX_ERROR: ErrorVariant = ErrorVariant::builtin(
        "FtpSyntaxError",
        -605,
        ErrorType::Ftp,
        "Server rejected our command because of syntax errors. FTP response codes 500, 501.",
        Some("ERR_FTP_SYNTAX_ERROR"),
    );

    /// Server does not support the command we issued. FTP response codes 502, 504.
    pub const FTP_COMMAND_NOT_SUPPORTED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "FtpCommandNotSupportedError",
        -606,
        ErrorType::Ftp,
        "Server does not support the command we issued. FTP response codes 502, 504.",
        Some("ERR_FTP_COMMAND_NOT_SUPPORTED"),
    );

    /// Server rejected our command because we didn't issue the commands in right order. FTP response code 503.
    pub const FTP_BAD_COMMAND_SEQUENCE_ERROR: ErrorVariant = ErrorVariant::builtin(
        "FtpBadCommandSequenceError",
        -607,
        ErrorType::Ftp,
        "Server rejected our command because we didn't issue the commands in right order. FTP response code 503.",
        Some("ERR_FTP_BAD_COMMAND_SEQUENCE"),
    );

    /// PKCS #12 import failed due to incorrect password.
    pub const PKCS12_IMPORT_BAD_PASSWORD_ERROR: ErrorVariant = ErrorVariant::builtin(
        "Pkcs12ImportBadPasswordError",
        -701,
        ErrorType::CertificateManager,
        "PKCS #12 import failed due to incorrect password.",
        Some("ERR_PKCS12_IMPORT_BAD_PASSWORD"),
    );

    /// PKCS #12 import failed due to other error.
    pub const PKCS12_IMPORT_FAILED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "Pkcs12ImportFailedError",
        -702,
        ErrorType::CertificateManager,
        "PKCS #12 import failed due to other error.",
        Some("ERR_PKCS12_IMPORT_FAILED"),
    );

    /// CA import failed - not a CA cert.
    pub const IMPORT_CA_CERT_NOT_CA_ERROR: ErrorVariant = ErrorVariant::builtin(
        "ImportCaCertNotCaError",
        -703,
        ErrorType::CertificateManager,
        "CA import failed - not a CA cert.",
        Some("ERR_IMPORT_CA_CERT_NOT_CA"),
    );

    /// Import failed - certificate already exists in database. Note it's a little weird this is an error but reimporting a PKCS12 is ok (no-op). That's how Mozilla does it, though.
    pub const IMPORT_CERT_ALREADY_EXISTS_ERROR: ErrorVariant = ErrorVariant::builtin(
        "ImportCertAlreadyExistsError",
        -704,
        ErrorType::CertificateManager,
        "Import failed - certificate already exists in database. Note it's a little weird this is an error but reimporting a PKCS12 is ok (no-op). That's how Mozilla does it, though.",
        Some("ERR_IMPORT_CERT_ALREADY_EXISTS"),
    );

    /// CA import failed due to some other error.
    pub const IMPORT_CA_CERT_FAILED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "ImportCaCertFailedError",
        -705,
        ErrorType::CertificateManager,
        "CA import failed due to some other error.",
        Some("ERR_IMPORT_CA_CERT_FAILED"),
    );

    /// Server certificate import failed due to some internal error.
    pub const IMPORT_SERVER_CERT_FAILED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "ImportServerCertFailedError",
        -706,
        ErrorType::CertificateManager,
        "Server certificate import failed due to some internal error.",
        Some("ERR_IMPORT_SERVER_CERT_FAILED"),
    );

    /// PKCS #12 import failed due to invalid MAC.
    pub const PKCS12_IMPORT_INVALID_MAC_ERROR: ErrorVariant = ErrorVariant::builtin(
        "Pkcs12ImportInvalidMacError",
        -707,
        ErrorType::CertificateManager,
        "PKCS #12 import failed due to invalid MAC.",
        Some("ERR_PKCS12_IMPORT_INVALID_MAC"),
    );

    /// PKCS #12 import failed due to invalid/corrupt file.
    pub const PKCS12_IMPORT_INVALID_FILE_ERROR: ErrorVariant = ErrorVariant::builtin(
        "Pkcs12ImportInvalidFileError",
        -708,
        ErrorType::CertificateManager,
        "PKCS #12 import failed due to invalid/corrupt file.",
        Some("ERR_PKCS12_IMPORT_INVALID_FILE"),
    );

    /// PKCS #12 import failed due to unsupported features.
    pub const PKCS12_IMPORT_UNSUPPORTED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "Pkcs12ImportUnsupportedError",
        -709,
        ErrorType::CertificateManager,
        "PKCS #12 import failed due to unsupported features.",
        Some("ERR_PKCS12_IMPORT_UNSUPPORTED"),
    );

    /// Key generation failed.
    pub const KEY_GENERATION_FAILED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "KeyGenerationFailedError",
        -710,
        ErrorType::CertificateManager,
        "Key generation failed.",
        Some("ERR_KEY_GENERATION_FAILED"),
    );

    /// Failure to export private key.
    pub const PRIVATE_KEY_EXPORT_FAILED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "PrivateKeyExportFailedError",
        -712,
        ErrorType::CertificateManager,
        "Failure to export private key.",
        Some("ERR_PRIVATE_KEY_EXPORT_FAILED"),
    );

    /// Self-signed certificate generation failed.
    pub const SELF_SIGNED_CERT_GENERATION_FAILED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "SelfSignedCertGenerationFailedError",
        -713,
        ErrorType::CertificateManager,
        "Self-signed certificate generation failed.",
        Some("ERR_SELF_SIGNED_CERT_GENERATION_FAILED"),
    );

    /// The certificate database changed in some way.
    pub const CERT_DATABASE_CHANGED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "CertDatabaseChangedError",
        -714,
        ErrorType::CertificateManager,
        "The certificate database changed in some way.",
        Some("ERR_CERT_DATABASE_CHANGED"),
    );

    /// The certificate verifier configuration changed in some way.
    pub const CERT_VERIFIER_CHANGED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "CertVerifierChangedError",
        -716,
        ErrorType::CertificateManager,
        "The certificate verifier configuration changed in some way.",
        Some("ERR_CERT_VERIFIER_CHANGED"),
    );

    /// DNS resolver received a malformed response.
    pub const DNS_MALFORMED_RESPONSE_ERROR: ErrorVariant = ErrorVariant::builtin(
        "DnsMalformedResponseError",
        -800,
        ErrorType::Dns,
        "DNS resolver received a malformed response.",
        Some("ERR_DNS_MALFORMED_RESPONSE"),
    );

    /// DNS server requires TCP
    pub const DNS_SERVER_REQUIRES_TCP_ERROR: ErrorVariant = ErrorVariant::builtin(
        "DnsServerRequiresTcpError",
        -801,
        ErrorType::Dns,
        "DNS server requires TCP",
        Some("ERR_DNS_SERVER_REQUIRES_TCP"),
    );

    /// DNS server failed. This error is returned for all of the following error conditions: 1 - Format error - The name server was unable to interpret the query. 2 - Server failure - The name server was unable to process this query due to a problem with the name server. 4 - Not Implemented - The name server does not support the requested kind of query. 5 - Refused - The name server refuses to perform the specified operation for policy reasons.
    pub const DNS_SERVER_FAILED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "DnsServerFailedError",
        -802,
        ErrorType::Dns,
        "DNS server failed. This error is returned for all of the following error conditions: 1 - Format error - The name server was unable to interpret the query. 2 - Server failure - The name server was unable to process this query due to a problem with the name server. 4 - Not Implemented - The name server does not support the requested kind of query. 5 - Refused - The name server refuses to perform the specified operation for policy reasons.",
        Some("ERR_DNS_SERVER_FAILED"),
    );

    /// DNS transaction timed out.
    pub const DNS_TIMED_OUT_ERROR: ErrorVariant = ErrorVariant::builtin(
        "DnsTimedOutError",
        -803,
        ErrorType::Dns,
        "DNS transaction timed out.",
        Some("ERR_DNS_TIMED_OUT"),
    );

    /// The entry was not found in cache or other local sources, for lookups where only local sources were queried.
    pub const DNS_CACHE_MISS_ERROR: ErrorVariant = ErrorVariant::builtin(
        "DnsCacheMissError",
        -804,
        ErrorType::Dns,
        "The entry was not found in cache or other local sources, for lookups where only local sources were queried.",
        Some("ERR_DNS_CACHE_MISS"),
    );

    /// Suffix search list rules prevent resolution of the given host name.
    pub const DNS_SEARCH_EMPTY_ERROR: ErrorVariant = ErrorVariant::builtin(
        "DnsSearchEmptyError",
        -805,
        ErrorType::Dns,
        "Suffix search list rules prevent resolution of the given host name.",
        Some("ERR_DNS_SEARCH_EMPTY"),
    );

    /// Failed to sort addresses according to RFC3484.
    pub const DNS_SORT_ERROR: ErrorVariant = ErrorVariant::builtin(
        "DnsSortError",
        -806,
        ErrorType::Dns,
        "Failed to sort addresses according to RFC3484.",
        Some("ERR_DNS_SORT_ERROR"),
    );

    /// Failed to resolve the hostname of a DNS-over-HTTPS server.
    pub const DNS_SECURE_RESOLVER_HOSTNAME_RESOLUTION_FAILED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "DnsSecureResolverHostnameResolutionFailedError",
        -808,
        ErrorType::Dns,
        "Failed to resolve the hostname of a DNS-over-HTTPS server.",
        Some("ERR_DNS_SECURE_RESOLVER_HOSTNAME_RESOLUTION_FAILED"),
    );

    /// DNS identified the request as disallowed for insecure connection (http/ws). Error should be handled as if an HTTP redirect was received to redirect to https or wss.
    pub const DNS_NAME_HTTPS_ONLY_ERROR: ErrorVariant = ErrorVariant::builtin(
        "DnsNameHttpsOnlyError",
        -809,
        ErrorType::Dns,
        "DNS identified the request as disallowed for insecure connection (http/ws). Error should be handled as if an HTTP redirect was received to redirect to https or wss.",
        Some("ERR_DNS_NAME_HTTPS_ONLY"),
    );

    /// All DNS requests associated with this job have been cancelled.
    pub const DNS_REQUEST_CANCELLED_ERROR: ErrorVariant = ErrorVariant::builtin(
        "DnsRequestCancelledError",
        -810,
        ErrorType::Dns,
        "All DNS requests associated with this job have been cancelled.",
        Some("ERR_DNS_REQUEST_CANCELLED"),
    );

    /// The hostname resolution of HTTPS record was expected to be resolved with alpn values of supported protocols, but did not.
    pub const DNS_NO_MATCHING_SUPPORTED_ALPN_ERROR: ErrorVariant = ErrorVariant::builtin(
        "DnsNoMatchingSupportedAlpnError",
        -811,
        ErrorType::Dns,
        "The hostname resolution of HTTPS record was expected to be resolved with alpn values of supported protocols, but did not.",
        Some("ERR_DNS_NO_MATCHING_SUPPORTED_ALPN"),
    );

    /// When checking whether secure DNS can be used, the response returned for the requested probe record either had no answer or was invalid.
    pub const DNS_SECURE_PROBE_RECORD_INVALID_ERROR: ErrorVariant = ErrorVariant::builtin(
        "DnsSecureProbeRecordInvalidError",
        -814,
        ErrorType::Dns,
        "When checking whether secure DNS can be used, the response returned for the requested probe record either had no answer or was invalid.",
        Some("ERR_DNS_SECURE_PROBE_RECORD_INVALID"),
    );
}

/// Every named variant, in dataset order.
pub static ALL: &[ErrorVariant] = &[
    ErrorVariant::IO_PENDING_ERROR,
    ErrorVariant::FAILED_ERROR,
    ErrorVariant::ABORTED_ERROR,
    ErrorVariant::INVALID_ARGUMENT_ERROR,
    ErrorVariant::INVALID_HANDLE_ERROR,
    ErrorVariant::FILE_NOT_FOUND_ERROR,
    ErrorVariant::TIMED_OUT_ERROR,
    ErrorVariant::FILE_TOO_BIG_ERROR,
    ErrorVariant::UNEXPECTED_ERROR,
    ErrorVariant::ACCESS_DENIED_ERROR,
    ErrorVariant::NOT_IMPLEMENTED_ERROR,
    ErrorVariant::INSUFFICIENT_RESOURCES_ERROR,
    ErrorVariant::OUT_OF_MEMORY_ERROR,
    ErrorVariant::UPLOAD_FILE_CHANGED_ERROR,
    ErrorVariant::SOCKET_NOT_CONNECTED_ERROR,
    ErrorVariant::FILE_EXISTS_ERROR,
    ErrorVariant::FILE_PATH_TOO_LONG_ERROR,
    ErrorVariant::FILE_NO_SPACE_ERROR,
    ErrorVariant::FILE_VIRUS_INFECTED_ERROR,
    ErrorVariant::BLOCKED_BY_CLIENT_ERROR,
    ErrorVariant::NETWORK_CHANGED_ERROR,
    ErrorVariant::BLOCKED_BY_ADMINISTRATOR_ERROR,
    ErrorVariant::SOCKET_IS_CONNECTED_ERROR,
    ErrorVariant::UPLOAD_STREAM_REWIND_NOT_SUPPORTED_ERROR,
    ErrorVariant::CONTEXT_SHUT_DOWN_ERROR,
    ErrorVariant::BLOCKED_BY_RESPONSE_ERROR,
    ErrorVariant::CLEARTEXT_NOT_PERMITTED_ERROR,
    ErrorVariant::BLOCKED_BY_CSP_ERROR,
    ErrorVariant::H2_OR_QUIC_REQUIRED_ERROR,
    ErrorVariant::BLOCKED_BY_ORB_ERROR,
    ErrorVariant::CONNECTION_CLOSED_ERROR,
    ErrorVariant::CONNECTION_RESET_ERROR,
    ErrorVariant::CONNECTION_REFUSED_ERROR,
    ErrorVariant::CONNECTION_ABORTED_ERROR,
    ErrorVariant::CONNECTION_FAILED_ERROR,
    ErrorVariant::NAME_NOT_RESOLVED_ERROR,
    ErrorVariant::INTERNET_DISCONNECTED_ERROR,
    ErrorVariant::SSL_PROTOCOL_ERROR,
    ErrorVariant::ADDRESS_INVALID_ERROR,
    ErrorVariant::ADDRESS_UNREACHABLE_ERROR,
    ErrorVariant::SSL_CLIENT_AUTH_CERT_NEEDED_ERROR,
    ErrorVariant::TUNNEL_CONNECTION_FAILED_ERROR,
    ErrorVariant::NO_SSL_VERSIONS_ENABLED_ERROR,
    ErrorVariant::SSL_VERSION_OR_CIPHER_MISMATCH_ERROR,
    ErrorVariant::SSL_RENEGOTIATION_REQUESTED_ERROR,
    ErrorVariant::PROXY_AUTH_UNSUPPORTED_ERROR,
    ErrorVariant::BAD_SSL_CLIENT_AUTH_CERT_ERROR,
    ErrorVariant::CONNECTION_TIMED_OUT_ERROR,
    ErrorVariant::HOST_RESOLVER_QUEUE_TOO_LARGE_ERROR,
    ErrorVariant::SOCKS_CONNECTION_FAILED_ERROR,
    ErrorVariant::SOCKS_CONNECTION_HOST_UNREACHABLE_ERROR,
    ErrorVariant::ALPN_NEGOTIATION_FAILED_ERROR,
    ErrorVariant::SSL_NO_RENEGOTIATION_ERROR,
    ErrorVariant::WINSOCK_UNEXPECTED_WRITTEN_BYTES_ERROR,
    ErrorVariant::SSL_DECOMPRESSION_FAILURE_ALERT_ERROR,
    ErrorVariant::SSL_BAD_RECORD_MAC_ALERT_ERROR,
    ErrorVariant::PROXY_AUTH_REQUESTED_ERROR,
    ErrorVariant::PROXY_CONNECTION_FAILED_ERROR,
    ErrorVariant::MANDATORY_PROXY_CONFIGURATION_FAILED_ERROR,
    ErrorVariant::PRECONNECT_MAX_SOCKET_LIMIT_ERROR,
    ErrorVariant::SSL_CLIENT_AUTH_PRIVATE_KEY_ACCESS_DENIED_ERROR,
    ErrorVariant::SSL_CLIENT_AUTH_CERT_NO_PRIVATE_KEY_ERROR,
    ErrorVariant::PROXY_CERTIFICATE_INVALID_ERROR,
    ErrorVariant::NAME_RESOLUTION_FAILED_ERROR,
    ErrorVariant::NETWORK_ACCESS_DENIED_ERROR,
    ErrorVariant::TEMPORARILY_THROTTLED_ERROR,
    ErrorVariant::HTTPS_PROXY_TUNNEL_RESPONSE_REDIRECT_ERROR,
    ErrorVariant::SSL_CLIENT_AUTH_SIGNATURE_FAILED_ERROR,
    ErrorVariant::MSG_TOO_BIG_ERROR,
    ErrorVariant::WS_PROTOCOL_ERROR,
    ErrorVariant::ADDRESS_IN_USE_ERROR,
    ErrorVariant::SSL_HANDSHAKE_NOT_COMPLETED_ERROR,
    ErrorVariant::SSL_BAD_PEER_PUBLIC_KEY_ERROR,
    ErrorVariant::SSL_PINNED_KEY_NOT_IN_CERT_CHAIN_ERROR,
    ErrorVariant::CLIENT_AUTH_CERT_TYPE_UNSUPPORTED_ERROR,
    ErrorVariant::SSL_DECRYPT_ERROR_ALERT_ERROR,
    ErrorVariant::WS_THROTTLE_QUEUE_TOO_LARGE_ERROR,
    ErrorVariant::SSL_SERVER_CERT_CHANGED_ERROR,
    ErrorVariant::SSL_UNRECOGNIZED_NAME_ALERT_ERROR,
    ErrorVariant::SOCKET_SET_RECEIVE_BUFFER_SIZE_ERROR,
    ErrorVariant::SOCKET_SET_SEND_BUFFER_SIZE_ERROR,
    ErrorVariant::SOCKET_RECEIVE_BUFFER_SIZE_UNCHANGEABLE_ERROR,
    ErrorVariant::SOCKET_SEND_BUFFER_SIZE_UNCHANGEABLE_ERROR,
    ErrorVariant::SSL_CLIENT_AUTH_CERT_BAD_FORMAT_ERROR,
    ErrorVariant::ICANN_NAME_COLLISION_ERROR,
    ErrorVariant::SSL_SERVER_CERT_BAD_FORMAT_ERROR,
    ErrorVariant::CT_STH_PARSING_FAILED_ERROR,
    ErrorVariant::CT_STH_INCOMPLETE_ERROR,
    ErrorVariant::UNABLE_TO_REUSE_CONNECTION_FOR_PROXY_AUTH_ERROR,
    ErrorVariant::CT_CONSISTENCY_PROOF_PARSING_FAILED_ERROR,
    ErrorVariant::SSL_OBSOLETE_CIPHER_ERROR,
    ErrorVariant::WS_UPGRADE_ERROR,
    ErrorVariant::READ_IF_READY_NOT_IMPLEMENTED_ERROR,
    ErrorVariant::NO_BUFFER_SPACE_ERROR,
    ErrorVariant::SSL_CLIENT_AUTH_NO_COMMON_ALGORITHMS_ERROR,
    ErrorVariant::EARLY_DATA_REJECTED_ERROR,
    ErrorVariant::WRONG_VERSION_ON_EARLY_DATA_ERROR,
    ErrorVariant::TLS13_DOWNGRADE_DETECTED_ERROR,
    ErrorVariant::SSL_KEY_USAGE_INCOMPATIBLE_ERROR,
    ErrorVariant::INVALID_ECH_CONFIG_LIST_ERROR,
    ErrorVariant::ECH_NOT_NEGOTIATED_ERROR,
    ErrorVariant::ECH_FALLBACK_CERTIFICATE_INVALID_ERROR,
    ErrorVariant::CERT_COMMON_NAME_INVALID_ERROR,
    ErrorVariant::CERT_DATE_INVALID_ERROR,
    ErrorVariant::CERT_AUTHORITY_INVALID_ERROR,
    ErrorVariant::CERT_CONTAINS_ERRORS_ERROR,
    ErrorVariant::CERT_NO_REVOCATION_MECHANISM_ERROR,
    ErrorVariant::CERT_UNABLE_TO_CHECK_REVOCATION_ERROR,
    ErrorVariant::CERT_REVOKED_ERROR,
    ErrorVariant::CERT_INVALID_ERROR,
    ErrorVariant::CERT_WEAK_SIGNATURE_ALGORITHM_ERROR,
    ErrorVariant::CERT_NON_UNIQUE_NAME_ERROR,
    ErrorVariant::CERT_WEAK_KEY_ERROR,
    ErrorVariant::CERT_NAME_CONSTRAINT_VIOLATION_ERROR,
    ErrorVariant::CERT_VALIDITY_TOO_LONG_ERROR,
    ErrorVariant::CERTIFICATE_TRANSPARENCY_REQUIRED_ERROR,
    ErrorVariant::CERT_SYMANTEC_LEGACY_ERROR,
    ErrorVariant::CERT_KNOWN_INTERCEPTION_BLOCKED_ERROR,
    ErrorVariant::CERT_END_ERROR,
    ErrorVariant::INVALID_URL_ERROR,
    ErrorVariant::DISALLOWED_URL_SCHEME_ERROR,
    ErrorVariant::UNKNOWN_URL_SCHEME_ERROR,
    ErrorVariant::INVALID_REDIRECT_ERROR,
    ErrorVariant::TOO_MANY_REDIRECTS_ERROR,
    ErrorVariant::UNSAFE_REDIRECT_ERROR,
    ErrorVariant::UNSAFE_PORT_ERROR,
    ErrorVariant::INVALID_RESPONSE_ERROR,
    ErrorVariant::INVALID_CHUNKED_ENCODING_ERROR,
    ErrorVariant::METHOD_NOT_SUPPORTED_ERROR,
    ErrorVariant::UNEXPECTED_PROXY_AUTH_ERROR,
    ErrorVariant::EMPTY_RESPONSE_ERROR,
    ErrorVariant::RESPONSE_HEADERS_TOO_BIG_ERROR,
    ErrorVariant::PAC_SCRIPT_FAILED_ERROR,
    ErrorVariant::REQUEST_RANGE_NOT_SATISFIABLE_ERROR,
    ErrorVariant::MALFORMED_IDENTITY_ERROR,
    ErrorVariant::CONTENT_DECODING_FAILED_ERROR,
    ErrorVariant::NETWORK_IO_SUSPENDED_ERROR,
    ErrorVariant::SYN_REPLY_NOT_RECEIVED_ERROR,
    ErrorVariant::ENCODING_CONVERSION_FAILED_ERROR,
    ErrorVariant::UNRECOGNIZED_FTP_DIRECTORY_LISTING_FORMAT_ERROR,
    ErrorVariant::NO_SUPPORTED_PROXIES_ERROR,
    ErrorVariant::HTTP2_PROTOCOL_ERROR,
    ErrorVariant::INVALID_AUTH_CREDENTIALS_ERROR,
    ErrorVariant::UNSUPPORTED_AUTH_SCHEME_ERROR,
    ErrorVariant::ENCODING_DETECTION_FAILED_ERROR,
    ErrorVariant::MISSING_AUTH_CREDENTIALS_ERROR,
    ErrorVariant::UNEXPECTED_SECURITY_LIBRARY_STATUS_ERROR,
    ErrorVariant::MISCONFIGURED_AUTH_ENVIRONMENT_ERROR,
    ErrorVariant::UNDOCUMENTED_SECURITY_LIBRARY_STATUS_ERROR,
    ErrorVariant::RESPONSE_BODY_TOO_BIG_TO_DRAIN_ERROR,
    ErrorVariant::RESPONSE_HEADERS_MULTIPLE_CONTENT_LENGTH_ERROR,
    ErrorVariant::INCOMPLETE_HTTP2_HEADERS_ERROR,
    ErrorVariant::PAC_NOT_IN_DHCP_ERROR,
    ErrorVariant::RESPONSE_HEADERS_MULTIPLE_CONTENT_DISPOSITION_ERROR,
    ErrorVariant::RESPONSE_HEADERS_MULTIPLE_LOCATION_ERROR,
    ErrorVariant::HTTP2_SERVER_REFUSED_STREAM_ERROR,
    ErrorVariant::HTTP2_PING_FAILED_ERROR,
    ErrorVariant::CONTENT_LENGTH_MISMATCH_ERROR,
    ErrorVariant::INCOMPLETE_CHUNKED_ENCODING_ERROR,
    ErrorVariant::QUIC_PROTOCOL_ERROR,
    ErrorVariant::RESPONSE_HEADERS_TRUNCATED_ERROR,
    ErrorVariant::QUIC_HANDSHAKE_FAILED_ERROR,
    ErrorVariant::HTTP2_INADEQUATE_TRANSPORT_SECURITY_ERROR,
    ErrorVariant::HTTP2_FLOW_CONTROL_ERROR,
    ErrorVariant::HTTP2_FRAME_SIZE_ERROR,
    ErrorVariant::HTTP2_COMPRESSION_ERROR,
    ErrorVariant::PROXY_AUTH_REQUESTED_WITH_NO_CONNECTION_ERROR,
    ErrorVariant::HTTP11_REQUIRED_ERROR,
    ErrorVariant::PROXY_HTTP11_REQUIRED_ERROR,
    ErrorVariant::PAC_SCRIPT_TERMINATED_ERROR,
    ErrorVariant::INVALID_HTTP_RESPONSE_ERROR,
    ErrorVariant::CONTENT_DECODING_INIT_FAILED_ERROR,
    ErrorVariant::HTTP2_RST_STREAM_NO_ERROR_RECEIVED_ERROR,
    ErrorVariant::TOO_MANY_RETRIES_ERROR,
    ErrorVariant::HTTP2_STREAM_CLOSED_ERROR,
    ErrorVariant::HTTP_RESPONSE_CODE_FAILURE_ERROR,
    ErrorVariant::QUIC_CERT_ROOT_NOT_KNOWN_ERROR,
    ErrorVariant::QUIC_GOAWAY_REQUEST_CAN_BE_RETRIED_ERROR,
    ErrorVariant::TOO_MANY_ACCEPT_CH_RESTARTS_ERROR,
    ErrorVariant::INCONSISTENT_IP_ADDRESS_SPACE_ERROR,
    ErrorVariant::CACHE_MISS_ERROR,
    ErrorVariant::CACHE_READ_FAILURE_ERROR,
    ErrorVariant::CACHE_WRITE_FAILURE_ERROR,
    ErrorVariant::CACHE_OPERATION_NOT_SUPPORTED_ERROR,
    ErrorVariant::CACHE_OPEN_FAILURE_ERROR,
    ErrorVariant::CACHE_CREATE_FAILURE_ERROR,
    ErrorVariant::CACHE_RACE_ERROR,
    ErrorVariant::CACHE_CHECKSUM_READ_FAILURE_ERROR,
    ErrorVariant::CACHE_CHECKSUM_MISMATCH_ERROR,
    ErrorVariant::CACHE_LOCK_TIMEOUT_ERROR,
    ErrorVariant::CACHE_AUTH_FAILURE_AFTER_READ_ERROR,
    ErrorVariant::CACHE_ENTRY_NOT_SUITABLE_ERROR,
    ErrorVariant::CACHE_DOOM_FAILURE_ERROR,
    ErrorVariant::CACHE_OPEN_OR_CREATE_FAILURE_ERROR,
    ErrorVariant::INSECURE_RESPONSE_ERROR,
    ErrorVariant::NO_PRIVATE_KEY_FOR_CERT_ERROR,
    ErrorVariant::ADD_USER_CERT_FAILED_ERROR,
    ErrorVariant::INVALID_SIGNED_EXCHANGE_ERROR,
    ErrorVariant::INVALID_WEB_BUNDLE_ERROR,
    ErrorVariant::TRUST_TOKEN_OPERATION_FAILED_ERROR,
    ErrorVariant::TRUST_TOKEN_OPERATION_SUCCESS_WITHOUT_SENDING_REQUEST_ERROR,
    ErrorVariant::FTP_FAILED_ERROR,
    ErrorVariant::FTP_SERVICE_UNAVAILABLE_ERROR,
    ErrorVariant::FTP_TRANSFER_ABORTED_ERROR,
    ErrorVariant::FTP_FILE_BUSY_ERROR,
    ErrorVariant::FTP_SYNTAX_ERROR,
    ErrorVariant::FTP_COMMAND_NOT_SUPPORTED_ERROR,
    ErrorVariant::FTP_BAD_COMMAND_SEQUENCE_ERROR,
    ErrorVariant::PKCS12_IMPORT_BAD_PASSWORD_ERROR,
    ErrorVariant::PKCS12_IMPORT_FAILED_ERROR,
    ErrorVariant::IMPORT_CA_CERT_NOT_CA_ERROR,
    ErrorVariant::IMPORT_CERT_ALREADY_EXISTS_ERROR,
    ErrorVariant::IMPORT_CA_CERT_FAILED_ERROR,
    ErrorVariant::IMPORT_SERVER_CERT_FAILED_ERROR,
    ErrorVariant::PKCS12_IMPORT_INVALID_MAC_ERROR,
    ErrorVariant::PKCS12_IMPORT_INVALID_FILE_ERROR,
    ErrorVariant::PKCS12_IMPORT_UNSUPPORTED_ERROR,
    ErrorVariant::KEY_GENERATION_FAILED_ERROR,
    ErrorVariant::PRIVATE_KEY_EXPORT_FAILED_ERROR,
    ErrorVariant::SELF_SIGNED_CERT_GENERATION_FAILED_ERROR,
    ErrorVariant::CERT_DATABASE_CHANGED_ERROR,
    ErrorVariant::CERT_VERIFIER_CHANGED_ERROR,
    ErrorVariant::DNS_MALFORMED_RESPONSE_ERROR,
    ErrorVariant::DNS_SERVER_REQUIRES_TCP_ERROR,
    ErrorVariant::DNS_SERVER_FAILED_ERROR,
    ErrorVariant::DNS_TIMED_OUT_ERROR,
    ErrorVariant::DNS_CACHE_MISS_ERROR,
    ErrorVariant::DNS_SEARCH_EMPTY_ERROR,
    ErrorVariant::DNS_SORT_ERROR,
    ErrorVariant::DNS_SECURE_RESOLVER_HOSTNAME_RESOLUTION_FAILED_ERROR,
    ErrorVariant::DNS_NAME_HTTPS_ONLY_ERROR,
    ErrorVariant::DNS_REQUEST_CANCELLED_ERROR,
    ErrorVariant::DNS_NO_MATCHING_SUPPORTED_ALPN_ERROR,
    ErrorVariant::DNS_SECURE_PROBE_RECORD_INVALID_ERROR,
];

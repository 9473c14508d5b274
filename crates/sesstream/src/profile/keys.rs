//! Embedded DER-encoded PKCS#1 `RSAPrivateKey` signing keys, one per signed
//! [`super::Profile`].
//!
//! These are build-time inputs, not cryptographic secrets in the usual
//! sense: shipped games embed the matching public key and refuse to load
//! assets whose signed stream doesn't verify against it, so an output built
//! by this crate needs the real key to be accepted. Generated for this
//! exercise; see `DESIGN.md` for provenance.

/// DER-encoded PKCS#1 `RSAPrivateKey` for the SSHD editor signing key.
#[rustfmt::skip]
pub const SSHD_EDITOR_KEY_DER: [u8; 1217] = [
	0x30, 0x82, 0x04, 0xbd, 0x02, 0x01, 0x00, 0x30, 0x0d, 0x06, 0x09, 0x2a,
	0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x01, 0x05, 0x00, 0x04, 0x82,
	0x04, 0xa7, 0x30, 0x82, 0x04, 0xa3, 0x02, 0x01, 0x00, 0x02, 0x82, 0x01,
	0x01, 0x00, 0xab, 0x0c, 0xf1, 0x1d, 0x84, 0x86, 0x99, 0x7a, 0x77, 0x88,
	0xc5, 0x4c, 0x61, 0x29, 0xad, 0x27, 0xf2, 0x7c, 0xa2, 0xc4, 0xbe, 0x04,
	0x3b, 0xee, 0x6e, 0xea, 0xc2, 0x50, 0x17, 0x3a, 0x0e, 0x7b, 0xc3, 0x4e,
	0xef, 0x96, 0xb3, 0xf7, 0x7b, 0x93, 0xd5, 0x92, 0x9c, 0x51, 0xdb, 0xde,
	0x75, 0x9b, 0x13, 0x8e, 0x22, 0x69, 0x1f, 0x39, 0x3d, 0x81, 0x78, 0x6a,
	0xa9, 0x89, 0xf5, 0x75, 0x2b, 0xce, 0xf2, 0x2d, 0x35, 0x1e, 0x3a, 0x38,
	0xb6, 0x1a, 0xac, 0xbd, 0xb0, 0x94, 0xb8, 0x9b, 0x9c, 0x65, 0x5f, 0xeb,
	0x1e, 0x5a, 0x6e, 0x69, 0x23, 0xeb, 0xf8, 0xda, 0x8c, 0x85, 0x21, 0xe2,
	0xd5, 0x9a, 0x8f, 0x23, 0x99, 0xf4, 0x1b, 0x71, 0x0c, 0x8d, 0xf8, 0x0d,
	0x17, 0x16, 0x77, 0xd2, 0x8b, 0x4a, 0x5f, 0x3b, 0x0f, 0x92, 0xa8, 0x3b,
	0xbd, 0x98, 0x03, 0x8b, 0xd8, 0x5b, 0x02, 0x94, 0x9e, 0x66, 0x19, 0xd8,
	0x1f, 0x9c, 0x05, 0xe9, 0x37, 0x0c, 0x76, 0xb9, 0x37, 0xa1, 0x82, 0xe4,
	0x3f, 0x63, 0xa5, 0x0b, 0xc2, 0x9d, 0xf5, 0x89, 0xea, 0xf8, 0xdd, 0x52,
	0xbc, 0x35, 0xae, 0x79, 0x1b, 0x8c, 0x4f, 0x5e, 0xa7, 0x4c, 0xc6, 0x86,
	0xf9, 0x32, 0x12, 0x80, 0x15, 0xfa, 0xb1, 0xda, 0x59, 0x3d, 0x78, 0xd6,
	0xdd, 0x4c, 0x5e, 0x5d, 0x66, 0x1e, 0x97, 0xa5, 0x99, 0x4d, 0xe7, 0xf7,
	0x4d, 0xbe, 0x08, 0x78, 0xe2, 0x3b, 0xa5, 0x2c, 0xa3, 0x6c, 0x6e, 0x67,
	0x42, 0x9d, 0x08, 0x1a, 0x9c, 0xa5, 0xed, 0xe1, 0x4f, 0x14, 0x7d, 0x98,
	0x14, 0xba, 0xe3, 0xb7, 0x47, 0x3a, 0xdc, 0xd2, 0x62, 0xcb, 0x64, 0xae,
	0x52, 0xa2, 0x5e, 0x5e, 0x55, 0xbb, 0x60, 0x07, 0x55, 0xda, 0xef, 0xec,
	0x10, 0x99, 0xa6, 0xb6, 0xb3, 0x53, 0x78, 0x4b, 0xa3, 0x79, 0x23, 0x64,
	0x52, 0xfc, 0x2b, 0xf1, 0x85, 0x93, 0x02, 0x03, 0x01, 0x00, 0x01, 0x02,
	0x82, 0x01, 0x00, 0x17, 0x8b, 0x19, 0xfa, 0xea, 0x9d, 0x4e, 0x2d, 0xb5,
	0x9b, 0x3d, 0x30, 0xd4, 0xa4, 0xd4, 0x61, 0x0d, 0xb6, 0xca, 0xfe, 0x92,
	0x7a, 0xe9, 0xb6, 0xd9, 0x4c, 0x75, 0xbf, 0x69, 0x5b, 0x03, 0xd8, 0x54,
	0x1b, 0x1e, 0xce, 0x1a, 0xea, 0x42, 0xf7, 0xa7, 0xab, 0x5c, 0xd9, 0xc5,
	0x8e, 0x1a, 0x98, 0xe4, 0x39, 0xa9, 0x91, 0xd7, 0x8a, 0xdc, 0xe4, 0xdf,
	0xaa, 0xaa, 0xb8, 0x42, 0xf1, 0x44, 0x3c, 0xe1, 0x47, 0x88, 0xaa, 0xa6,
	0xef, 0xdc, 0x5c, 0xd2, 0x8e, 0xef, 0x69, 0xa0, 0xf9, 0x46, 0x2f, 0x0b,
	0xe3, 0x44, 0x53, 0xc5, 0x23, 0xb2, 0x9e, 0x8d, 0xab, 0xa3, 0x30, 0xc5,
	0xe7, 0xbf, 0x67, 0xdd, 0x30, 0xd4, 0xc5, 0x6d, 0x2b, 0x83, 0xc3, 0x5c,
	0xb3, 0x8c, 0x8c, 0x7a, 0xa4, 0x9f, 0xa8, 0x76, 0x70, 0x1e, 0x26, 0x1d,
	0x02, 0xd0, 0x07, 0x46, 0xe1, 0xae, 0x3f, 0x64, 0x9d, 0x09, 0x2a, 0x21,
	0xc0, 0x38, 0x09, 0xbc, 0x64, 0xdb, 0x1f, 0x3a, 0x20, 0xd4, 0x1d, 0x9b,
	0x9a, 0xe3, 0x8d, 0x83, 0x80, 0x6c, 0xe9, 0x07, 0x3e, 0x6e, 0xc9, 0x5c,
	0x37, 0xd3, 0xd0, 0xcb, 0x5c, 0x48, 0x44, 0x7a, 0xcb, 0x0b, 0x72, 0x53,
	0x97, 0x30, 0xad, 0xf9, 0x8a, 0x7f, 0x14, 0x73, 0x5d, 0x09, 0x28, 0xb7,
	0x69, 0x5a, 0xbd, 0xca, 0x5b, 0x8e, 0x00, 0xda, 0xc2, 0x5c, 0xec, 0xb3,
	0x26, 0xba, 0xe8, 0x25, 0x2a, 0x39, 0xd9, 0xcd, 0x89, 0x38, 0x29, 0xa6,
	0x9b, 0x4f, 0x74, 0xb5, 0x5c, 0x7a, 0x2e, 0x30, 0x35, 0xfa, 0x5e, 0xa7,
	0xf7, 0xb8, 0x58, 0xcd, 0x8c, 0xb3, 0x86, 0x06, 0x34, 0xb7, 0xa7, 0xff,
	0x92, 0xa6, 0x15, 0xc4, 0xad, 0x3c, 0xb7, 0x22, 0xb7, 0x6a, 0x5c, 0x8d,
	0x6a, 0x4e, 0x33, 0xf5, 0x94, 0x06, 0xbf, 0x1c, 0xa0, 0x75, 0xb1, 0xf6,
	0xde, 0xd4, 0x31, 0x18, 0x8e, 0x3a, 0x4d, 0x02, 0x81, 0x81, 0x00, 0xe0,
	0x78, 0xc5, 0xb7, 0xea, 0x02, 0x6b, 0x07, 0xcf, 0x63, 0xdb, 0x3b, 0x4f,
	0xc3, 0xc6, 0xcd, 0xda, 0x42, 0x3b, 0x4d, 0xcf, 0xed, 0xad, 0xb1, 0x21,
	0x59, 0x9a, 0x01, 0x79, 0x9b, 0x83, 0x96, 0xfe, 0x80, 0x13, 0x04, 0x4f,
	0xec, 0xae, 0x1f, 0x56, 0x99, 0x73, 0xfa, 0xd7, 0xda, 0x50, 0x60, 0x66,
	0x14, 0x76, 0x4e, 0xe9, 0xd8, 0xed, 0x97, 0xca, 0x7c, 0x14, 0xaf, 0x86,
	0x4c, 0xfe, 0x38, 0x27, 0xc8, 0x1e, 0x89, 0x1d, 0x26, 0x8a, 0xe7, 0x9f,
	0xee, 0x27, 0x0b, 0x4a, 0x00, 0xd0, 0x85, 0xdb, 0x48, 0x2f, 0x41, 0x5d,
	0xd1, 0xc4, 0xf4, 0xb0, 0x63, 0xc1, 0x8e, 0xbe, 0xdf, 0xfc, 0xcf, 0x27,
	0x7a, 0x72, 0x58, 0x15, 0x25, 0xbb, 0x9a, 0xcb, 0x6f, 0xee, 0xa5, 0x83,
	0x1e, 0x56, 0x44, 0x97, 0x0b, 0xfd, 0x2b, 0x5e, 0x6e, 0x89, 0x68, 0x40,
	0x63, 0x4e, 0x25, 0xdb, 0x93, 0xd2, 0xf7, 0x02, 0x81, 0x81, 0x00, 0xc3,
	0x13, 0x53, 0xe0, 0x35, 0x6d, 0x34, 0x07, 0x1d, 0x97, 0x2a, 0xb1, 0x9c,
	0xde, 0xbd, 0x2a, 0xed, 0x2b, 0xcb, 0xcf, 0x1d, 0x20, 0x38, 0x01, 0xe7,
	0xd7, 0xd0, 0x94, 0x85, 0xc6, 0x34, 0x7a, 0xc8, 0xcd, 0x42, 0xc0, 0x65,
	0x30, 0xf4, 0x36, 0x4d, 0x43, 0x58, 0x9f, 0xfc, 0x77, 0xc1, 0x11, 0xd7,
	0xf0, 0xb3, 0x19, 0xbf, 0x3b, 0x4f, 0xc6, 0x97, 0x7d, 0x63, 0xaa, 0xfe,
	0x82, 0x1b, 0xe7, 0x54, 0xf7, 0x58, 0x35, 0x44, 0x1f, 0xdf, 0x89, 0x2b,
	0x5c, 0x7c, 0x21, 0x8c, 0x58, 0x80, 0x58, 0xb5, 0x27, 0x26, 0x14, 0x21,
	0xf6, 0xa2, 0x2c, 0xa0, 0x4a, 0x56, 0xd6, 0xd9, 0xb7, 0x08, 0x20, 0x8f,
	0x08, 0x18, 0x86, 0xf0, 0xbf, 0x35, 0xe4, 0xb7, 0x15, 0xeb, 0x08, 0xa5,
	0xe4, 0xc4, 0xd6, 0xe7, 0xae, 0x1b, 0x9f, 0xec, 0x94, 0xe8, 0x9d, 0xc6,
	0xc1, 0xfc, 0x4f, 0xa8, 0xb0, 0x5f, 0x45, 0x02, 0x81, 0x80, 0x4d, 0xb7,
	0x42, 0xad, 0x14, 0x25, 0xd6, 0x2c, 0x94, 0x0e, 0xfc, 0x7e, 0x22, 0x75,
	0xa3, 0xc4, 0xed, 0x85, 0xf4, 0xc6, 0x51, 0xf0, 0xf6, 0x2b, 0xd7, 0x62,
	0x10, 0x41, 0xe6, 0x7a, 0x83, 0x2a, 0xa9, 0xde, 0x69, 0xb7, 0x1a, 0x7c,
	0xd5, 0x24, 0x20, 0x75, 0x6c, 0x84, 0x32, 0x6b, 0x71, 0x5c, 0x8e, 0xbb,
	0x12, 0xe2, 0xeb, 0x6f, 0xa1, 0x82, 0xe6, 0x25, 0xe3, 0x7b, 0x89, 0xc1,
	0xea, 0x5a, 0x42, 0xdb, 0xb4, 0x46, 0xc0, 0x82, 0xf1, 0xa0, 0x93, 0xec,
	0x7e, 0x34, 0x18, 0x61, 0x03, 0xd0, 0xf4, 0x44, 0x9f, 0xa7, 0xbf, 0xf5,
	0xba, 0x7d, 0x04, 0xfc, 0xe4, 0xac, 0xa9, 0x45, 0x1f, 0x60, 0x11, 0x49,
	0x01, 0x81, 0xa1, 0x80, 0xb8, 0xdd, 0x35, 0x06, 0x01, 0xd7, 0xe7, 0xf7,
	0x7e, 0xe2, 0xac, 0x71, 0x08, 0x2c, 0x15, 0xbb, 0xab, 0x73, 0x1e, 0xa7,
	0xc3, 0x0c, 0xb4, 0x63, 0x0f, 0xad, 0x02, 0x81, 0x80, 0x21, 0x95, 0xab,
	0x44, 0x17, 0x8e, 0xa4, 0x7d, 0x71, 0x1f, 0xbc, 0x6e, 0xf5, 0xb5, 0xf7,
	0x55, 0x73, 0x9d, 0xad, 0xaa, 0x0b, 0xb6, 0xa7, 0x4d, 0xd4, 0xaf, 0x78,
	0x2e, 0x89, 0xd5, 0x74, 0xe5, 0x8a, 0xba, 0xa3, 0xfa, 0x61, 0xb1, 0x8a,
	0xe9, 0xea, 0x65, 0x64, 0xd5, 0xae, 0x6e, 0xa3, 0xa3, 0xc1, 0xcc, 0xa3,
	0xd9, 0x13, 0xee, 0x4f, 0x2e, 0xbe, 0x98, 0x0c, 0xd7, 0xbc, 0x97, 0x83,
	0xdc, 0x50, 0xe9, 0x80, 0x9b, 0x33, 0x0e, 0x55, 0xba, 0xd4, 0xe7, 0x48,
	0x4b, 0xb2, 0x50, 0xee, 0x4f, 0xd7, 0x68, 0x55, 0x0a, 0xf4, 0x49, 0xf4,
	0xe3, 0xbf, 0xf8, 0xec, 0x78, 0x72, 0xe5, 0x2b, 0x16, 0x07, 0xe9, 0xf9,
	0xe7, 0x09, 0x7d, 0xb1, 0xf6, 0x9d, 0x7a, 0xbd, 0x8b, 0x30, 0x9c, 0x71,
	0x33, 0x1a, 0x92, 0x04, 0x19, 0x85, 0x6e, 0xa1, 0x99, 0xc0, 0x45, 0x57,
	0x7e, 0x13, 0x69, 0xc2, 0x0d, 0x02, 0x81, 0x81, 0x00, 0xdc, 0xe8, 0x0b,
	0x18, 0x63, 0xa9, 0xaf, 0x5d, 0xac, 0xbb, 0x80, 0x1f, 0xcd, 0x3f, 0x81,
	0x5e, 0xd3, 0x80, 0xda, 0x44, 0xc7, 0xe3, 0x93, 0xfe, 0x4e, 0xb6, 0x6d,
	0x0f, 0xf5, 0xa1, 0xe2, 0xc7, 0x53, 0x72, 0xc2, 0x31, 0xae, 0x9e, 0x16,
	0x84, 0xd1, 0x0f, 0xb2, 0xb7, 0x3a, 0x2a, 0xd8, 0x98, 0x1f, 0x71, 0x9c,
	0x27, 0x96, 0x96, 0x4d, 0x3d, 0xce, 0xd2, 0x03, 0x57, 0xda, 0x5f, 0x63,
	0x85, 0x2a, 0x83, 0xa8, 0x27, 0x1e, 0x31, 0x20, 0x23, 0x5e, 0x90, 0x91,
	0xcc, 0x1f, 0x35, 0xa1, 0xcf, 0x5d, 0x3f, 0xbb, 0x06, 0xf6, 0x30, 0x80,
	0x62, 0xe2, 0xdf, 0x5b, 0x4e, 0x4e, 0xa1, 0x8b, 0x65, 0x42, 0x0f, 0x81,
	0x5c, 0xdd, 0xae, 0x33, 0xf0, 0x36, 0x3a, 0xa0, 0x19, 0x5e, 0x10, 0xb0,
	0xaa, 0x0d, 0x39, 0xac, 0x91, 0xc3, 0x37, 0xa9, 0xf6, 0xf5, 0x47, 0x17,
	0x04, 0x5e, 0x0d, 0x2b, 0x46,
];

/// DER-encoded PKCS#1 `RSAPrivateKey` for the SS3 editor signing key.
#[rustfmt::skip]
pub const SS3_EDITOR_KEY_DER: [u8; 1217] = [
	0x30, 0x82, 0x04, 0xbd, 0x02, 0x01, 0x00, 0x30, 0x0d, 0x06, 0x09, 0x2a,
	0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x01, 0x05, 0x00, 0x04, 0x82,
	0x04, 0xa7, 0x30, 0x82, 0x04, 0xa3, 0x02, 0x01, 0x00, 0x02, 0x82, 0x01,
	0x01, 0x00, 0xbb, 0xbc, 0xdd, 0x47, 0x29, 0xed, 0x98, 0x5f, 0x8e, 0x5b,
	0xdb, 0x32, 0x31, 0x46, 0x43, 0x5c, 0xfb, 0x59, 0x2e, 0x39, 0x30, 0x02,
	0xc4, 0x6f, 0x6e, 0xb7, 0xb8, 0x18, 0x2e, 0xc6, 0xc3, 0x41, 0xa0, 0xbf,
	0xf0, 0x0c, 0xba, 0xa6, 0x3f, 0x6e, 0x27, 0x5c, 0x5e, 0x44, 0xad, 0x87,
	0x61, 0x9a, 0x25, 0x02, 0x2b, 0xd0, 0x5d, 0xfd, 0xb4, 0x83, 0x52, 0x25,
	0x0b, 0x01, 0xf2, 0x31, 0xb8, 0x66, 0x60, 0xfa, 0x0b, 0x8f, 0x46, 0x8a,
	0x46, 0xd2, 0x4c, 0x13, 0xbf, 0x8d, 0x78, 0x44, 0xf2, 0xc1, 0x0d, 0xcd,
	0x82, 0xfc, 0x3a, 0x51, 0xfc, 0xbd, 0x89, 0x96, 0x40, 0x1e, 0x9f, 0x88,
	0x1e, 0x2a, 0xa7, 0x0f, 0x72, 0x00, 0x93, 0x7a, 0x84, 0x55, 0x3d, 0x0f,
	0xda, 0x4d, 0x35, 0xf8, 0x49, 0xf4, 0x07, 0x95, 0x64, 0x01, 0x67, 0xd4,
	0xa3, 0x7c, 0x4c, 0xc9, 0x4d, 0x9d, 0xc2, 0xc4, 0xf2, 0xd6, 0x00, 0x36,
	0xb9, 0xbc, 0x65, 0x25, 0x5a, 0x9f, 0x2c, 0x82, 0xd8, 0x0a, 0xfe, 0x1c,
	0xa9, 0xb6, 0xfe, 0x82, 0xea, 0x7d, 0xac, 0x24, 0x53, 0xca, 0xd4, 0xaa,
	0x1a, 0xda, 0x24, 0x63, 0xe1, 0x34, 0xc3, 0x61, 0x96, 0x6b, 0xb7, 0x77,
	0x71, 0x35, 0x5a, 0x43, 0x9f, 0x46, 0x2f, 0xf3, 0x9f, 0x8d, 0xe7, 0xd5,
	0xf1, 0x69, 0xd5, 0xae, 0x09, 0x1e, 0xbb, 0xf6, 0x4f, 0xaf, 0x58, 0x41,
	0x45, 0x6c, 0x4c, 0xa4, 0x65, 0x88, 0x75, 0xcd, 0x43, 0x74, 0x61, 0xc0,
	0xb8, 0x70, 0x20, 0xfa, 0xd9, 0x18, 0xf7, 0x09, 0xae, 0x65, 0xb9, 0x9d,
	0xab, 0xe0, 0x65, 0xc6, 0xbe, 0xf0, 0xc1, 0x41, 0xe0, 0x8e, 0x83, 0xcc,
	0x2a, 0x4c, 0x68, 0x47, 0x78, 0x5a, 0xf1, 0xea, 0x7a, 0x43, 0xf1, 0x25,
	0x1b, 0x57, 0x7f, 0x3e, 0xd0, 0xd4, 0xd7, 0x7a, 0x79, 0xd8, 0x5f, 0x91,
	0x9e, 0xd3, 0x1a, 0x25, 0xf3, 0x61, 0x02, 0x03, 0x01, 0x00, 0x01, 0x02,
	0x82, 0x01, 0x00, 0x52, 0xe8, 0x4f, 0x18, 0x34, 0x4d, 0xf6, 0xf2, 0x8c,
	0x1d, 0xc8, 0xa9, 0x5b, 0xd5, 0x59, 0xbe, 0x60, 0x49, 0xbb, 0xfe, 0x09,
	0x53, 0xcf, 0x88, 0x1e, 0x6f, 0x07, 0xdf, 0xb6, 0x18, 0x94, 0xf6, 0x10,
	0x95, 0x72, 0xdf, 0x4c, 0x36, 0x4a, 0xe0, 0xcc, 0x85, 0x20, 0x24, 0x58,
	0x35, 0xe7, 0x46, 0x79, 0x7d, 0x81, 0xf7, 0xdc, 0xea, 0x43, 0xa3, 0x92,
	0xcd, 0x45, 0x15, 0x30, 0xee, 0x00, 0x2f, 0x46, 0x38, 0x66, 0x8e, 0x79,
	0x6a, 0x6b, 0x68, 0x47, 0xac, 0x98, 0xf5, 0x52, 0xdd, 0xb0, 0x0e, 0xcd,
	0x97, 0xaa, 0x76, 0xd5, 0x12, 0x8b, 0xf8, 0xf0, 0x1f, 0xe8, 0x65, 0x1d,
	0xb2, 0xb1, 0x0f, 0xc9, 0x03, 0x2b, 0x27, 0x51, 0xf9, 0xd3, 0x23, 0x09,
	0x7a, 0x4c, 0xbf, 0xb8, 0x4b, 0xd3, 0xec, 0xee, 0xc4, 0x6c, 0x8b, 0xaa,
	0x5c, 0xdf, 0x6d, 0xef, 0x43, 0x1f, 0x01, 0xc2, 0x97, 0xd3, 0x5d, 0x28,
	0x17, 0x55, 0x25, 0x47, 0xa9, 0x8b, 0x02, 0xcb, 0xb6, 0x3c, 0x3c, 0x4e,
	0x46, 0x45, 0x4a, 0x1c, 0xe7, 0x44, 0x11, 0x01, 0x7c, 0x91, 0x66, 0xec,
	0x0f, 0xe0, 0x90, 0x7b, 0x63, 0x10, 0x79, 0x08, 0x26, 0x82, 0xfe, 0x86,
	0xeb, 0xd2, 0x6c, 0x52, 0xc1, 0x93, 0xd7, 0xca, 0xea, 0x22, 0x2b, 0x64,
	0xa1, 0xa6, 0xfc, 0xe7, 0x88, 0xc7, 0x28, 0xd5, 0xab, 0x85, 0x66, 0xd0,
	0x27, 0x35, 0xa8, 0xa1, 0xba, 0xfe, 0x09, 0xd5, 0x50, 0x08, 0x19, 0x46,
	0xed, 0x10, 0xc6, 0xb3, 0x7e, 0xae, 0x89, 0x9b, 0x2a, 0x87, 0x2a, 0xb2,
	0x28, 0x1f, 0xe4, 0xbf, 0x52, 0xfb, 0xb9, 0x41, 0xeb, 0x75, 0x38, 0x88,
	0x04, 0x6c, 0xc6, 0x39, 0xda, 0x81, 0x11, 0x35, 0x39, 0xa4, 0x32, 0x76,
	0x48, 0xca, 0x44, 0x6a, 0xe5, 0x7b, 0xa7, 0x5d, 0xf3, 0xd4, 0x17, 0xb2,
	0xe2, 0x2e, 0x77, 0x2e, 0xd3, 0x5d, 0x19, 0x02, 0x81, 0x81, 0x00, 0xee,
	0xd8, 0xf2, 0x08, 0x66, 0x5a, 0x24, 0x1b, 0xd3, 0xcd, 0xda, 0xcd, 0xa9,
	0xcf, 0x43, 0x48, 0xe1, 0xae, 0x60, 0x18, 0x05, 0x18, 0x25, 0x25, 0x28,
	0x1c, 0x62, 0x7e, 0x92, 0x1e, 0x30, 0xfc, 0xa3, 0x8e, 0xa0, 0xdb, 0x1c,
	0x95, 0x28, 0xff, 0x5f, 0xe7, 0xd4, 0x3f, 0x78, 0xef, 0x85, 0xc7, 0x47,
	0x82, 0xd7, 0x88, 0xae, 0x93, 0xe3, 0x94, 0xe2, 0x4c, 0x97, 0xb1, 0x12,
	0xf8, 0x2c, 0x51, 0x29, 0x1e, 0x2f, 0x9c, 0x07, 0xec, 0x71, 0x9f, 0x8e,
	0xa8, 0x81, 0xe4, 0x95, 0xd6, 0x8d, 0x84, 0x0b, 0xb1, 0xe1, 0x01, 0xef,
	0xd5, 0x64, 0x36, 0x43, 0x4a, 0x36, 0x59, 0x10, 0xc1, 0x22, 0xb3, 0x2c,
	0x83, 0x25, 0x70, 0xed, 0x16, 0x20, 0x8e, 0x2c, 0x6c, 0x9f, 0xa5, 0xbd,
	0x3d, 0xe9, 0xe2, 0x62, 0xba, 0xd4, 0x9a, 0x7c, 0xac, 0x7f, 0xde, 0x20,
	0x0c, 0x6f, 0xa7, 0xdd, 0xaf, 0xe8, 0x53, 0x02, 0x81, 0x81, 0x00, 0xc9,
	0x38, 0x4c, 0xf1, 0x64, 0x5d, 0x9d, 0x2f, 0xa0, 0xe0, 0x15, 0x78, 0x88,
	0xfa, 0xce, 0x89, 0x1f, 0xd7, 0xd7, 0x15, 0x4e, 0x55, 0x4e, 0x9e, 0x56,
	0x52, 0xa0, 0xce, 0xf3, 0x18, 0xbc, 0xe7, 0x0b, 0x01, 0x9d, 0xe6, 0x23,
	0xbc, 0x25, 0xa4, 0x68, 0xdf, 0x51, 0x29, 0x5d, 0x2f, 0x1d, 0x51, 0x74,
	0x63, 0xc4, 0xda, 0x91, 0x36, 0x7f, 0x9a, 0xc1, 0x4c, 0xc7, 0xe0, 0x5c,
	0x1f, 0xb4, 0x2e, 0xcc, 0x62, 0x48, 0x7d, 0xc7, 0xd1, 0x73, 0xa7, 0x27,
	0xfd, 0x0f, 0x8a, 0x1b, 0xb2, 0x5e, 0x27, 0x7c, 0xf8, 0x6d, 0xf9, 0x4c,
	0x0c, 0x5e, 0xd4, 0xdd, 0x44, 0x05, 0x4a, 0x86, 0xc3, 0xb9, 0xc5, 0x37,
	0x81, 0x29, 0x6a, 0xff, 0xc6, 0xe8, 0x90, 0x71, 0xaf, 0x17, 0x86, 0x90,
	0x5c, 0x4c, 0xbe, 0x49, 0x73, 0x50, 0xde, 0xa6, 0x7d, 0xed, 0x23, 0x6c,
	0x50, 0x54, 0xa4, 0xa2, 0x90, 0xee, 0xfb, 0x02, 0x81, 0x80, 0x0b, 0xca,
	0x33, 0xb0, 0x4c, 0x75, 0x18, 0xa1, 0x33, 0x04, 0x4f, 0x4f, 0xa5, 0x99,
	0x30, 0x86, 0x11, 0x75, 0xcd, 0x12, 0x82, 0x75, 0xdd, 0xa7, 0x86, 0xe2,
	0x57, 0xce, 0x4d, 0xa2, 0x25, 0xe2, 0xe2, 0xa3, 0xf0, 0xb6, 0xc0, 0x23,
	0x70, 0xc1, 0xa2, 0x57, 0x4c, 0x37, 0xd1, 0xdd, 0x68, 0xea, 0x1c, 0x52,
	0x8e, 0x17, 0x16, 0x1f, 0x00, 0xb5, 0xe1, 0xb1, 0xcc, 0x2f, 0x16, 0x73,
	0x9f, 0xa4, 0x65, 0xf6, 0x32, 0x7d, 0x6e, 0x3a, 0xb2, 0xa5, 0x20, 0xa2,
	0x9a, 0xbe, 0xd0, 0xd2, 0xa5, 0x6b, 0xa6, 0x34, 0x22, 0x9a, 0x38, 0xdf,
	0x7c, 0xb1, 0xdd, 0x02, 0x75, 0xca, 0x51, 0xb4, 0x66, 0xe5, 0x17, 0x46,
	0x65, 0xfb, 0xbc, 0x08, 0x42, 0x95, 0x22, 0x06, 0x3e, 0x9f, 0x2c, 0xc7,
	0x38, 0x9b, 0x4f, 0x2a, 0x4f, 0xc2, 0x4c, 0x73, 0x2b, 0x60, 0xa8, 0x8e,
	0x54, 0x98, 0xa1, 0xad, 0xc4, 0x37, 0x02, 0x81, 0x81, 0x00, 0x85, 0x25,
	0x08, 0xdc, 0xad, 0xa1, 0xb8, 0x11, 0xbc, 0xec, 0xa9, 0xa8, 0x61, 0x53,
	0x3b, 0xf8, 0xc6, 0x26, 0x46, 0xfe, 0xa5, 0x1f, 0x93, 0x6e, 0xf8, 0x05,
	0xa2, 0xbc, 0x6d, 0x64, 0xd0, 0x12, 0x3d, 0x59, 0x2b, 0x87, 0x0d, 0xdc,
	0x40, 0x38, 0x22, 0xe0, 0xa9, 0xce, 0xaa, 0x07, 0x33, 0xea, 0x23, 0x0e,
	0xa5, 0x42, 0x4e, 0xd5, 0xf5, 0xe7, 0x8b, 0xc2, 0x67, 0x7b, 0x90, 0xd9,
	0xb5, 0x9b, 0x45, 0xc8, 0x3e, 0xd9, 0x63, 0xaf, 0xb7, 0x4c, 0x43, 0x0c,
	0x93, 0x0c, 0xba, 0xb8, 0xf2, 0xce, 0x44, 0x46, 0x0a, 0x56, 0xec, 0x38,
	0x3f, 0x43, 0xb0, 0xc9, 0x82, 0x8a, 0xc6, 0xd3, 0x9a, 0x07, 0xe2, 0x6b,
	0x47, 0xe1, 0xb2, 0x2f, 0x86, 0xd1, 0x95, 0x37, 0xdb, 0x64, 0x41, 0xff,
	0xa1, 0x14, 0x44, 0x7b, 0xd6, 0x66, 0x0d, 0x5a, 0xc3, 0xe0, 0x2d, 0x9a,
	0x95, 0xf7, 0x7e, 0x4e, 0x52, 0xa3, 0x02, 0x81, 0x80, 0x2f, 0xbf, 0xbc,
	0x40, 0x64, 0xa7, 0x59, 0x1d, 0x3c, 0x69, 0xd5, 0x94, 0x92, 0xdc, 0x39,
	0xce, 0x1e, 0x2a, 0x3c, 0xbb, 0xcc, 0x12, 0xa3, 0x38, 0x7c, 0x0a, 0xfa,
	0xbb, 0x22, 0x15, 0xc9, 0xd3, 0xc5, 0xd9, 0x37, 0x2f, 0xdf, 0x2a, 0xe1,
	0xb1, 0xc9, 0xf6, 0xcf, 0x5a, 0x2f, 0x8d, 0x9a, 0x6a, 0xac, 0x87, 0x70,
	0xdf, 0xbc, 0x48, 0x39, 0xe3, 0x25, 0x11, 0x93, 0x6d, 0x7d, 0x50, 0xa0,
	0x8e, 0xaa, 0x90, 0xac, 0x0d, 0x38, 0x0a, 0xc1, 0x22, 0xd5, 0x7f, 0xb8,
	0x07, 0xaf, 0x04, 0x1e, 0x7d, 0x46, 0xa9, 0x60, 0x93, 0xbc, 0x23, 0x99,
	0xce, 0x51, 0xe3, 0xb8, 0x10, 0x4d, 0xb1, 0x9b, 0x80, 0x17, 0xea, 0xb0,
	0x10, 0xb6, 0x97, 0xdc, 0x1e, 0xd9, 0xee, 0xe2, 0x14, 0x59, 0x55, 0xbc,
	0x7f, 0x9e, 0x33, 0x8b, 0x53, 0x3d, 0x2d, 0x6e, 0x4e, 0x27, 0xae, 0x09,
	0x22, 0xc8, 0x0a, 0x68, 0x3b,
];

/// DER-encoded PKCS#1 `RSAPrivateKey` for the FUSION editor signing key.
#[rustfmt::skip]
pub const FUSION_EDITOR_KEY_DER: [u8; 1218] = [
	0x30, 0x82, 0x04, 0xbe, 0x02, 0x01, 0x00, 0x30, 0x0d, 0x06, 0x09, 0x2a,
	0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x01, 0x05, 0x00, 0x04, 0x82,
	0x04, 0xa8, 0x30, 0x82, 0x04, 0xa4, 0x02, 0x01, 0x00, 0x02, 0x82, 0x01,
	0x01, 0x00, 0xa0, 0x2e, 0xfd, 0x2c, 0x08, 0x79, 0xda, 0x61, 0xe7, 0x74,
	0xaa, 0xd1, 0xf5, 0x09, 0x44, 0x72, 0x48, 0x41, 0x86, 0xbf, 0xe2, 0xaa,
	0x8c, 0xb1, 0x65, 0xa0, 0x54, 0x1b, 0x7c, 0x07, 0xda, 0x1d, 0x1a, 0x0d,
	0x7e, 0xe5, 0xd5, 0xca, 0x9c, 0x18, 0xa3, 0x2e, 0xc0, 0x9c, 0x9c, 0xe2,
	0x76, 0x93, 0x82, 0xa5, 0xfd, 0x2f, 0xaf, 0x78, 0x6f, 0xd5, 0x88, 0xc9,
	0x20, 0xb8, 0xdc, 0x20, 0xf8, 0xfc, 0xc5, 0xb6, 0x5f, 0x77, 0xa2, 0x63,
	0xa1, 0x5b, 0xbd, 0xee, 0x02, 0xe7, 0xc1, 0x55, 0x1d, 0x38, 0x16, 0x2b,
	0x89, 0x20, 0x1a, 0x35, 0x15, 0xba, 0xa7, 0x35, 0xf6, 0x2f, 0x1e, 0xfb,
	0x42, 0x62, 0xe9, 0x71, 0x60, 0x5d, 0xf7, 0x07, 0xbe, 0x45, 0xb6, 0x38,
	0xba, 0x98, 0xe0, 0xf2, 0x43, 0x9a, 0xc2, 0x6a, 0x54, 0x55, 0x30, 0xf0,
	0x75, 0x09, 0x91, 0xe9, 0xef, 0x71, 0x5f, 0x3d, 0xbd, 0x92, 0x4d, 0x88,
	0xae, 0x3b, 0x0c, 0x45, 0x3f, 0x77, 0x66, 0x11, 0x00, 0xe8, 0x14, 0xc3,
	0xd5, 0x29, 0x8d, 0x89, 0x57, 0x33, 0x78, 0x18, 0x3d, 0xac, 0x9f, 0x1e,
	0xcf, 0x92, 0xd7, 0x29, 0xa1, 0x82, 0x32, 0x4d, 0xe9, 0x8d, 0x8c, 0x0e,
	0xe2, 0x45, 0x53, 0xdc, 0x04, 0xff, 0x62, 0x8e, 0x7d, 0x2e, 0xf6, 0xd8,
	0x72, 0x3b, 0x0f, 0x98, 0x97, 0x6c, 0xb7, 0x57, 0xf6, 0xd9, 0x40, 0x88,
	0x95, 0x1c, 0xce, 0xcb, 0x7d, 0xbe, 0x7d, 0xe0, 0x46, 0x68, 0x54, 0xec,
	0xab, 0xd8, 0x9d, 0x83, 0x7b, 0x00, 0x7b, 0xf7, 0x51, 0xb2, 0xe1, 0x91,
	0x97, 0x0f, 0x55, 0xe7, 0xef, 0x2a, 0xc5, 0x78, 0x34, 0x95, 0x4f, 0x73,
	0xf4, 0x7a, 0xef, 0x65, 0x23, 0xf3, 0x44, 0xb8, 0x1f, 0x14, 0x12, 0x02,
	0x68, 0x34, 0x37, 0xc8, 0xeb, 0xe1, 0xf8, 0x34, 0x60, 0xc0, 0x60, 0x5c,
	0x5b, 0x13, 0xbf, 0xa7, 0xcb, 0xab, 0x02, 0x03, 0x01, 0x00, 0x01, 0x02,
	0x82, 0x01, 0x00, 0x25, 0x96, 0x21, 0x0d, 0xfe, 0x07, 0x29, 0xb9, 0x23,
	0x68, 0x7a, 0xd4, 0xbd, 0x5c, 0xa9, 0x54, 0xef, 0xa3, 0x80, 0x8c, 0xf2,
	0x10, 0xf6, 0xe6, 0x81, 0x64, 0x37, 0x98, 0x23, 0x68, 0x6c, 0x43, 0xbb,
	0xe3, 0x42, 0xcd, 0x87, 0x76, 0xfd, 0x5d, 0xc2, 0x9c, 0xab, 0xd1, 0x93,
	0xf6, 0x87, 0xc0, 0x61, 0x3d, 0xb5, 0xc5, 0x44, 0xb5, 0x4b, 0xf8, 0x9d,
	0x1a, 0x24, 0xb5, 0x7b, 0xe1, 0xb8, 0xcb, 0x07, 0x51, 0x9d, 0xe1, 0x22,
	0x97, 0xa2, 0x3b, 0x36, 0xbb, 0xec, 0xae, 0x98, 0xec, 0xf1, 0xe8, 0x41,
	0x3b, 0x81, 0xf7, 0xa8, 0x6e, 0xa0, 0x64, 0xa5, 0xeb, 0xc1, 0x92, 0x99,
	0x00, 0x78, 0x39, 0x61, 0x71, 0x9b, 0x1d, 0x31, 0x63, 0xfd, 0xbf, 0xb9,
	0xdc, 0x61, 0xdc, 0x91, 0x9c, 0x07, 0x44, 0xff, 0x2d, 0x98, 0x10, 0x4d,
	0x65, 0x7e, 0xf0, 0xf9, 0xee, 0x1c, 0xa3, 0x4b, 0xa7, 0xdf, 0x1d, 0x5f,
	0xf7, 0x8a, 0x27, 0xfc, 0x1b, 0xa5, 0x6a, 0x7f, 0x6f, 0x7a, 0x95, 0xe8,
	0xd8, 0xba, 0x63, 0x6b, 0xbb, 0xa5, 0x98, 0xb4, 0x92, 0x89, 0xab, 0xdb,
	0xb8, 0x77, 0xf8, 0x2e, 0x35, 0xe3, 0x4b, 0xa4, 0xda, 0x7a, 0x68, 0xe4,
	0x40, 0x97, 0xf1, 0x36, 0xe1, 0x3d, 0xc9, 0x1e, 0x5e, 0x87, 0x25, 0x81,
	0x0d, 0x03, 0x90, 0x02, 0x97, 0xe1, 0xef, 0x0c, 0xcd, 0x85, 0xd8, 0x43,
	0xc4, 0x00, 0x08, 0x0a, 0xcf, 0x64, 0x92, 0x43, 0x33, 0xe5, 0x5c, 0x89,
	0xc3, 0x34, 0x93, 0x67, 0xf1, 0x16, 0x60, 0xf8, 0x3c, 0xb7, 0x33, 0x88,
	0x6c, 0xd6, 0x89, 0x2a, 0x99, 0xd7, 0x87, 0xff, 0xd7, 0x69, 0x33, 0x60,
	0xba, 0x49, 0x34, 0x34, 0x89, 0xde, 0xbb, 0x60, 0x0c, 0xa3, 0xa4, 0x31,
	0xa4, 0x63, 0x21, 0xfd, 0x00, 0x75, 0x47, 0x7c, 0x50, 0x59, 0xb5, 0x86,
	0x57, 0xe7, 0x41, 0xd6, 0x12, 0xc1, 0x71, 0x02, 0x81, 0x81, 0x00, 0xdc,
	0x75, 0xd7, 0x7a, 0x7d, 0x41, 0xe2, 0x18, 0x71, 0x08, 0xae, 0xbf, 0x37,
	0xa7, 0x3c, 0x3a, 0xd4, 0x93, 0xfd, 0xf0, 0x8f, 0x23, 0xa2, 0xa2, 0x6f,
	0x95, 0x9b, 0x63, 0x03, 0x45, 0xec, 0x2f, 0x08, 0x1b, 0x06, 0x48, 0xe4,
	0x07, 0x03, 0x91, 0xe1, 0x8b, 0xb6, 0x25, 0xae, 0x2f, 0x79, 0xef, 0x63,
	0xe0, 0x89, 0xdd, 0x50, 0xf4, 0xbb, 0x13, 0x00, 0x55, 0xd5, 0x78, 0xbd,
	0xad, 0xb1, 0x81, 0x7e, 0x74, 0x3f, 0x60, 0x75, 0x65, 0xb6, 0x48, 0x7b,
	0x8e, 0x66, 0x02, 0xa1, 0x38, 0x21, 0x54, 0x45, 0x39, 0xf9, 0xfc, 0x6b,
	0xfb, 0x3e, 0x56, 0xe6, 0xeb, 0xa1, 0x43, 0x8f, 0xce, 0x66, 0xdc, 0xc5,
	0x65, 0xdc, 0xa3, 0x12, 0x12, 0x88, 0xa0, 0x5b, 0x65, 0x54, 0xb2, 0x94,
	0x7f, 0xc9, 0xe1, 0xb6, 0x27, 0xfa, 0xd7, 0xc7, 0x1a, 0xa6, 0xc1, 0x3c,
	0xb3, 0x10, 0x72, 0xc9, 0xe1, 0x16, 0x0f, 0x02, 0x81, 0x81, 0x00, 0xba,
	0x01, 0x97, 0x22, 0x79, 0x0b, 0x87, 0x9e, 0x77, 0xf2, 0x36, 0x91, 0x9d,
	0xf9, 0x9e, 0x28, 0x40, 0xc8, 0x0b, 0xd8, 0xa1, 0xb7, 0xdf, 0x6b, 0x72,
	0xd1, 0x7d, 0xb0, 0x9b, 0x6b, 0xd2, 0xdd, 0x5d, 0xf8, 0x2b, 0x3a, 0x4a,
	0x72, 0xf0, 0xf3, 0x0e, 0xec, 0x2e, 0x50, 0xdc, 0xc3, 0x56, 0x26, 0x91,
	0x18, 0x64, 0x89, 0x75, 0x20, 0xc5, 0xb1, 0xdd, 0xaf, 0xd0, 0xe8, 0x7d,
	0xdb, 0x42, 0x3a, 0x7a, 0xdd, 0xf6, 0x75, 0x13, 0x98, 0xaf, 0x58, 0xe5,
	0x97, 0x6e, 0xfa, 0x3c, 0x02, 0xee, 0x07, 0xfe, 0xfa, 0x14, 0xaf, 0xe8,
	0x14, 0x8c, 0xa0, 0x4f, 0x3d, 0x42, 0x62, 0xce, 0xfe, 0x52, 0x0d, 0x79,
	0x69, 0xda, 0x79, 0x3f, 0x12, 0xd3, 0xb4, 0x26, 0xaf, 0x41, 0x07, 0x24,
	0x34, 0x87, 0xc6, 0x99, 0xf5, 0x9a, 0xb5, 0x65, 0xdf, 0xed, 0x5f, 0x31,
	0x49, 0xc6, 0xda, 0xab, 0x96, 0x2c, 0xa5, 0x02, 0x81, 0x81, 0x00, 0xbc,
	0x0e, 0x49, 0xa0, 0xd2, 0xf8, 0x40, 0x45, 0x59, 0x26, 0x6e, 0xe9, 0xee,
	0x2f, 0x59, 0xd1, 0x55, 0x44, 0x68, 0x79, 0xab, 0xa0, 0x5a, 0x3a, 0xf5,
	0xb4, 0x48, 0xb8, 0x4d, 0x32, 0x78, 0x26, 0x26, 0x63, 0xe7, 0x18, 0x86,
	0x6a, 0xf5, 0x40, 0x9b, 0x84, 0xf1, 0xfb, 0x72, 0x7a, 0x4d, 0x29, 0x47,
	0xa9, 0x61, 0xf0, 0xc7, 0xfd, 0xfb, 0x16, 0x5a, 0x52, 0xdd, 0xa6, 0x01,
	0x27, 0x09, 0x23, 0xcd, 0x1a, 0x9c, 0x75, 0x4b, 0xaf, 0x57, 0xae, 0xbc,
	0xb6, 0xdb, 0x8d, 0xa2, 0xb8, 0x9e, 0xb5, 0xa3, 0xd7, 0xb0, 0xc7, 0x01,
	0xd5, 0x6f, 0x77, 0xf1, 0xc3, 0x4d, 0xec, 0xb3, 0xde, 0xfd, 0x1f, 0x95,
	0xc3, 0x2e, 0x52, 0x6c, 0x38, 0x23, 0x13, 0xa6, 0xe2, 0xe9, 0x3c, 0xec,
	0x2f, 0x95, 0xa6, 0x54, 0x1c, 0x06, 0x7d, 0xc9, 0xf9, 0x92, 0x05, 0x84,
	0x21, 0xbb, 0x06, 0x2f, 0xef, 0x31, 0x41, 0x02, 0x81, 0x80, 0x67, 0xde,
	0x7d, 0x7c, 0x45, 0xa5, 0xf7, 0x9c, 0xb9, 0x94, 0x6b, 0x7e, 0x93, 0x7e,
	0x12, 0x20, 0x9e, 0x54, 0x57, 0xb1, 0x28, 0x55, 0x9a, 0x90, 0xd0, 0xf4,
	0x45, 0x40, 0xfa, 0xf9, 0x92, 0x2e, 0x05, 0xcc, 0x90, 0xaf, 0x23, 0x65,
	0xde, 0x41, 0x8c, 0xa2, 0xbd, 0x16, 0x70, 0xc1, 0x2f, 0xf9, 0xa7, 0x6a,
	0xbc, 0xb1, 0xb9, 0xd3, 0x8c, 0x32, 0x4f, 0xfe, 0x5f, 0x25, 0x85, 0x2a,
	0x8c, 0x68, 0x45, 0xb6, 0x6f, 0x6b, 0x5f, 0x7f, 0x12, 0xe4, 0x0c, 0x89,
	0xac, 0xf2, 0x55, 0xd2, 0xb9, 0x03, 0x84, 0x12, 0x38, 0xbd, 0x26, 0x57,
	0x5b, 0x54, 0x26, 0x0b, 0xaa, 0x67, 0xac, 0xf9, 0x7d, 0xee, 0x82, 0x4f,
	0x67, 0x2d, 0xef, 0xd7, 0xde, 0x9a, 0xaa, 0x43, 0x91, 0x87, 0xa0, 0x63,
	0x29, 0x32, 0xf1, 0x44, 0xa2, 0x99, 0x0b, 0x83, 0xa9, 0x75, 0x4f, 0xfb,
	0xc7, 0xec, 0xd2, 0x86, 0xb0, 0xf5, 0x02, 0x81, 0x81, 0x00, 0xc3, 0x68,
	0xde, 0x20, 0x84, 0x4a, 0x41, 0xeb, 0xf4, 0x4f, 0xb3, 0xca, 0xf4, 0x9e,
	0xb4, 0xb4, 0x1a, 0x96, 0x05, 0xe5, 0x82, 0x91, 0x07, 0x3f, 0x33, 0x8e,
	0x91, 0x42, 0x5a, 0x8b, 0x59, 0xa9, 0x7a, 0x68, 0xd5, 0x84, 0xc1, 0x97,
	0xb4, 0x73, 0xa1, 0x7e, 0x0c, 0xe1, 0xc7, 0x81, 0xb5, 0xe7, 0x36, 0xaa,
	0xaa, 0x5c, 0xec, 0xdb, 0xd7, 0x2c, 0xb8, 0x77, 0xd8, 0x84, 0x74, 0x3a,
	0xb0, 0x8b, 0xef, 0x25, 0x5c, 0xca, 0xd6, 0x97, 0x99, 0x86, 0x8f, 0x2d,
	0x14, 0x99, 0xbe, 0x24, 0x85, 0x08, 0xd2, 0x21, 0x00, 0x60, 0x14, 0xfe,
	0x74, 0xd6, 0x72, 0xa0, 0xa4, 0x9d, 0xa0, 0xa4, 0xd2, 0x9d, 0x65, 0x06,
	0x64, 0x1a, 0xe9, 0xf3, 0xf8, 0x45, 0xa4, 0x84, 0xb2, 0x1a, 0x82, 0xed,
	0x23, 0x94, 0x79, 0x9c, 0x1f, 0x22, 0x4b, 0x05, 0x55, 0x66, 0x00, 0x85,
	0x46, 0x75, 0x6a, 0x19, 0x62, 0xf8,
];

/// DER-encoded PKCS#1 `RSAPrivateKey` for the SS4 editor signing key.
#[rustfmt::skip]
pub const SS4_EDITOR_KEY_DER: [u8; 1218] = [
	0x30, 0x82, 0x04, 0xbe, 0x02, 0x01, 0x00, 0x30, 0x0d, 0x06, 0x09, 0x2a,
	0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x01, 0x05, 0x00, 0x04, 0x82,
	0x04, 0xa8, 0x30, 0x82, 0x04, 0xa4, 0x02, 0x01, 0x00, 0x02, 0x82, 0x01,
	0x01, 0x00, 0xe9, 0xf3, 0xf7, 0x65, 0xb6, 0x29, 0x59, 0xef, 0x1f, 0xa6,
	0xe8, 0x44, 0x38, 0x8f, 0x66, 0xb4, 0xe5, 0x34, 0xb0, 0xde, 0xb0, 0x0d,
	0x69, 0x0d, 0x96, 0xe0, 0x32, 0x30, 0x60, 0x37, 0x4e, 0x9f, 0x46, 0xde,
	0x66, 0xb6, 0x38, 0x1f, 0xee, 0x0e, 0x16, 0xe9, 0xe8, 0x1b, 0x91, 0xdf,
	0xfc, 0x15, 0x4d, 0xa0, 0x9a, 0xa6, 0x8d, 0x7f, 0x1f, 0xbd, 0x45, 0xca,
	0xe4, 0xb5, 0x22, 0xb8, 0xda, 0x82, 0x75, 0xca, 0x90, 0x17, 0x90, 0x61,
	0x07, 0xed, 0x02, 0xdb, 0x0a, 0xaf, 0x63, 0x62, 0xa7, 0xbf, 0x47, 0xcf,
	0x34, 0xa3, 0xbb, 0x0b, 0x5c, 0x77, 0x3f, 0x98, 0x60, 0x1a, 0x21, 0xea,
	0xe7, 0x22, 0x50, 0xef, 0xf8, 0x88, 0xe4, 0x3c, 0x9c, 0xee, 0x3a, 0x57,
	0x5b, 0x79, 0x24, 0x7f, 0xfb, 0x56, 0x5b, 0x61, 0x60, 0xc2, 0x52, 0xfa,
	0x05, 0xbb, 0x96, 0x95, 0x7c, 0x91, 0x52, 0x8c, 0xbd, 0x83, 0x0c, 0x39,
	0x09, 0x54, 0x4b, 0x5a, 0xb4, 0x5e, 0xb4, 0x3d, 0x2a, 0x7a, 0x67, 0x74,
	0x8b, 0x4b, 0x91, 0xce, 0x23, 0x8f, 0x8e, 0x7d, 0x86, 0x39, 0xa2, 0x67,
	0xdc, 0x75, 0x26, 0x58, 0xe9, 0x1c, 0x03, 0x5c, 0x1f, 0x3a, 0xe8, 0x38,
	0x2e, 0xf8, 0x2c, 0x8b, 0xfe, 0x4e, 0x17, 0xbb, 0x40, 0xed, 0x58, 0x20,
	0xab, 0xd7, 0x7f, 0x59, 0xed, 0xa1, 0xc1, 0x54, 0x1b, 0x5f, 0xdc, 0x47,
	0xf6, 0xab, 0xc5, 0x1b, 0xca, 0x9e, 0xee, 0x08, 0x60, 0x6a, 0xff, 0x2c,
	0x17, 0xb7, 0xf8, 0xde, 0xe1, 0x4d, 0x58, 0x0b, 0x47, 0x2e, 0xdc, 0x02,
	0x47, 0x55, 0xaa, 0xaf, 0xc3, 0x6d, 0x79, 0xf2, 0x44, 0xd6, 0x3d, 0x09,
	0x10, 0xf3, 0xb8, 0x02, 0x62, 0x79, 0xf5, 0xcb, 0x78, 0xbf, 0x1e, 0xcf,
	0x73, 0x70, 0x07, 0x31, 0x7f, 0xa1, 0x91, 0xe7, 0x74, 0x93, 0x55, 0xdb,
	0xb4, 0x2a, 0x3b, 0x04, 0x8f, 0x1d, 0x02, 0x03, 0x01, 0x00, 0x01, 0x02,
	0x82, 0x01, 0x00, 0x63, 0xb6, 0x13, 0x4f, 0x4a, 0x60, 0x3d, 0x70, 0x69,
	0x31, 0x1d, 0xf5, 0x55, 0x95, 0xe8, 0xd4, 0x58, 0x8c, 0x28, 0x86, 0x00,
	0xca, 0xf6, 0x67, 0x50, 0x52, 0xa5, 0x91, 0x70, 0xb0, 0xa1, 0xd5, 0xc8,
	0xc2, 0xa9, 0x4c, 0x28, 0x87, 0x93, 0x52, 0x75, 0xf9, 0xa3, 0x6f, 0x7c,
	0xb0, 0xd6, 0x23, 0xce, 0x3e, 0x11, 0x2b, 0xc3, 0x4a, 0xd7, 0x20, 0x38,
	0x4a, 0xcd, 0x47, 0x56, 0x51, 0x2a, 0xf0, 0x47, 0x7b, 0xda, 0x05, 0xf1,
	0x07, 0x29, 0xf5, 0x9e, 0x2d, 0xf5, 0x53, 0xe3, 0x2b, 0xfd, 0x0a, 0xcd,
	0x74, 0x46, 0x9f, 0x31, 0xed, 0x19, 0xaf, 0xc9, 0x6f, 0x0c, 0x26, 0x97,
	0x26, 0x22, 0xf4, 0xc1, 0x42, 0x45, 0xcf, 0x32, 0x57, 0x93, 0x1b, 0x05,
	0xca, 0x8d, 0xb6, 0x08, 0x14, 0x73, 0xee, 0xce, 0x6b, 0xa6, 0x6d, 0xac,
	0x27, 0xdb, 0xa1, 0xa4, 0x00, 0x7a, 0x63, 0x05, 0xa7, 0xee, 0x6c, 0xc7,
	0x4d, 0xa0, 0x4a, 0xdd, 0x95, 0x6f, 0x8c, 0x02, 0xb6, 0xe2, 0x41, 0x69,
	0x02, 0x53, 0xfd, 0xb0, 0x0f, 0x99, 0xa8, 0xe8, 0x3c, 0x18, 0xfb, 0x1d,
	0xc1, 0x8c, 0x29, 0xaf, 0x5e, 0xff, 0xae, 0x7f, 0x5a, 0xca, 0xca, 0x02,
	0xc1, 0xc8, 0x15, 0xba, 0x0d, 0x84, 0x60, 0x57, 0x85, 0xfa, 0xfa, 0xde,
	0xd4, 0x1f, 0x4d, 0xcf, 0x67, 0xed, 0x9a, 0x8a, 0xd3, 0x0b, 0x05, 0x34,
	0x71, 0xb5, 0x3c, 0x6e, 0x4d, 0xac, 0xd6, 0xe4, 0x39, 0x27, 0xe3, 0x82,
	0x28, 0x4c, 0x3f, 0xc8, 0xc8, 0xb0, 0xb8, 0xe9, 0xfc, 0x88, 0xeb, 0x17,
	0x45, 0xd5, 0xb5, 0x29, 0x8b, 0x25, 0x35, 0x03, 0xe8, 0x65, 0xa8, 0x6e,
	0x18, 0xc2, 0x09, 0x28, 0x21, 0x5e, 0xb9, 0x6b, 0x21, 0xc2, 0x05, 0xa3,
	0x01, 0x6d, 0x8b, 0x8b, 0x2f, 0x76, 0x78, 0x07, 0x02, 0xe4, 0x99, 0xec,
	0x6d, 0x98, 0x59, 0x18, 0x31, 0x9d, 0x11, 0x02, 0x81, 0x81, 0x00, 0xff,
	0xa6, 0x36, 0xb0, 0x4a, 0xe8, 0x96, 0xa8, 0x72, 0x3d, 0x93, 0xc5, 0x74,
	0x08, 0xff, 0x2b, 0x70, 0x2c, 0xfa, 0x41, 0xcb, 0x9a, 0xdc, 0x26, 0xb9,
	0x59, 0x30, 0x9f, 0xe2, 0x69, 0xb1, 0x34, 0xa4, 0x24, 0xf7, 0x01, 0x92,
	0x66, 0x5a, 0xaa, 0x2c, 0x21, 0xec, 0x26, 0xc7, 0xfa, 0x89, 0x7e, 0xfc,
	0x5e, 0xb8, 0xbb, 0x44, 0x70, 0x51, 0xbe, 0xc2, 0x6d, 0x60, 0xc5, 0x6c,
	0x44, 0x84, 0x7d, 0xa8, 0x44, 0x70, 0xd3, 0xa7, 0x28, 0x23, 0xbf, 0xbe,
	0x1c, 0x4a, 0xe4, 0xac, 0xd8, 0x2c, 0x59, 0x6a, 0x14, 0x5e, 0xae, 0xfc,
	0x6a, 0x39, 0xca, 0x73, 0x33, 0x7c, 0xe3, 0xdf, 0x85, 0xaf, 0x51, 0x76,
	0xe9, 0x3f, 0x66, 0x16, 0xdf, 0x10, 0xac, 0xc2, 0x3f, 0xb4, 0x68, 0xbe,
	0xe9, 0x27, 0xc8, 0x22, 0xfe, 0xf4, 0x7c, 0xae, 0xd8, 0x69, 0xd8, 0xfd,
	0x6a, 0xc9, 0x4b, 0xd7, 0xa3, 0xe2, 0x0b, 0x02, 0x81, 0x81, 0x00, 0xea,
	0x46, 0x22, 0x01, 0x8a, 0xc3, 0x4f, 0x01, 0xcb, 0x56, 0xaf, 0x60, 0x6b,
	0x27, 0xd3, 0x8a, 0x39, 0xec, 0x72, 0x37, 0x7d, 0xb2, 0xaa, 0x27, 0x86,
	0x6f, 0x41, 0x02, 0xf2, 0xd5, 0xd2, 0x44, 0x6c, 0xcd, 0xfe, 0xca, 0x50,
	0x2d, 0x03, 0xb6, 0x0f, 0xa2, 0xa7, 0x03, 0xc0, 0x76, 0x62, 0x01, 0x21,
	0x5d, 0xe2, 0x3a, 0x8f, 0x66, 0x22, 0xa0, 0xbf, 0x0f, 0x96, 0xa3, 0x18,
	0x25, 0xf6, 0xfb, 0x3b, 0x6e, 0xf3, 0x1a, 0x57, 0xfe, 0xf5, 0x1a, 0x05,
	0xf7, 0x82, 0x41, 0xda, 0xff, 0x65, 0xc9, 0xc8, 0x27, 0x7e, 0x4c, 0x2e,
	0x2f, 0x7d, 0x00, 0x35, 0x06, 0xc0, 0xe8, 0x9d, 0xee, 0x3c, 0xdd, 0xb6,
	0xe6, 0x39, 0x48, 0xe8, 0x6b, 0x5e, 0x2a, 0xd0, 0xae, 0x24, 0xd5, 0x52,
	0x03, 0x8b, 0xa7, 0xf5, 0x40, 0xef, 0x99, 0x32, 0x70, 0x44, 0xdd, 0x29,
	0xd9, 0x9c, 0xd4, 0xa1, 0xac, 0xf4, 0x77, 0x02, 0x81, 0x81, 0x00, 0x8c,
	0xb1, 0x09, 0x99, 0xdd, 0xaf, 0xc0, 0xf1, 0xf4, 0xe5, 0x04, 0x84, 0xff,
	0x05, 0xd0, 0x80, 0x34, 0x5c, 0xdc, 0x61, 0x07, 0x4f, 0x33, 0x67, 0x30,
	0x4b, 0xf0, 0x61, 0x9d, 0x35, 0xf3, 0x6a, 0xf8, 0x06, 0xcb, 0xd5, 0x16,
	0x9f, 0xb3, 0xb7, 0xc1, 0x4f, 0xed, 0xe9, 0xad, 0xd6, 0xa8, 0x82, 0xb5,
	0x1a, 0xdf, 0xe9, 0x57, 0x91, 0xc4, 0xbb, 0x09, 0xbf, 0x2e, 0x29, 0x98,
	0x1a, 0xe1, 0x1b, 0x52, 0x56, 0x50, 0x0d, 0x7b, 0x09, 0xb1, 0x1a, 0xdd,
	0xe2, 0x2e, 0x29, 0x49, 0x22, 0x32, 0xce, 0x06, 0x7e, 0x2d, 0x59, 0x79,
	0xda, 0x6f, 0xf1, 0x85, 0x92, 0xc9, 0x61, 0x92, 0xea, 0xbc, 0x80, 0x45,
	0xc3, 0xb9, 0xbb, 0x52, 0x4c, 0xf2, 0x9d, 0x50, 0xcd, 0xc4, 0x58, 0x7c,
	0xf0, 0x4d, 0x8f, 0x6c, 0x0b, 0x09, 0xbb, 0xf0, 0x71, 0x73, 0x57, 0x12,
	0xa8, 0x09, 0x1d, 0xef, 0x0f, 0xe6, 0xdf, 0x02, 0x81, 0x81, 0x00, 0x90,
	0xb7, 0xaa, 0x22, 0x11, 0xb9, 0xfc, 0x80, 0x3b, 0x3f, 0xdd, 0x2e, 0x4e,
	0x83, 0x57, 0xa5, 0xb7, 0x8a, 0x5c, 0x33, 0xf3, 0x2d, 0xfe, 0xf6, 0x53,
	0x91, 0x3e, 0x33, 0xb8, 0x16, 0x65, 0xc1, 0x67, 0x05, 0x09, 0x33, 0xa8,
	0xbb, 0x65, 0xe3, 0x7d, 0x5d, 0x18, 0x96, 0xb4, 0xb9, 0x6c, 0x69, 0x0e,
	0x57, 0x94, 0x7c, 0x60, 0x40, 0xd3, 0x7b, 0x41, 0x0b, 0x3c, 0x1e, 0x9b,
	0xb8, 0x38, 0x0d, 0x91, 0xf5, 0x43, 0xaf, 0x2e, 0x54, 0x8c, 0xcb, 0xfa,
	0x8b, 0x9e, 0xa7, 0x57, 0xc5, 0x14, 0xf7, 0xc4, 0xf0, 0xc0, 0x90, 0x06,
	0xa7, 0xc7, 0x2b, 0xed, 0x95, 0xb2, 0x6c, 0xff, 0xc2, 0x3f, 0x4f, 0x26,
	0xc0, 0xa8, 0xfa, 0x64, 0xb8, 0x8e, 0x7f, 0x1c, 0x51, 0xb6, 0xe7, 0x1f,
	0xb6, 0x98, 0xfa, 0xb4, 0x01, 0xdd, 0x00, 0x61, 0xac, 0x00, 0x9e, 0x2e,
	0x50, 0x03, 0x15, 0x46, 0x9a, 0x34, 0x99, 0x02, 0x81, 0x80, 0x74, 0x9f,
	0xa2, 0x07, 0x32, 0x9f, 0x28, 0x2f, 0x94, 0x2b, 0xb7, 0x48, 0x95, 0xc8,
	0x8c, 0x95, 0x9c, 0xa9, 0x75, 0x1e, 0x06, 0x30, 0xc4, 0x4d, 0x8f, 0xfe,
	0x48, 0x24, 0xf8, 0xee, 0x9d, 0xea, 0x00, 0x61, 0xe8, 0xeb, 0xf1, 0xf7,
	0xf0, 0x7e, 0xd9, 0x49, 0x12, 0x3a, 0x33, 0xf7, 0x7c, 0x5a, 0x50, 0x9b,
	0x3d, 0x7a, 0x57, 0x05, 0xd2, 0xf1, 0xcc, 0xa5, 0xbf, 0x3a, 0x08, 0x8c,
	0xd5, 0xa5, 0xf4, 0x76, 0x9f, 0xd1, 0xba, 0x0b, 0xee, 0x1b, 0x95, 0xfb,
	0x55, 0xdb, 0x9a, 0x54, 0xbd, 0xc9, 0x1c, 0x8b, 0x8f, 0xa6, 0x09, 0xff,
	0xb2, 0xaa, 0x37, 0x3f, 0xfb, 0x70, 0x25, 0x28, 0xaa, 0xea, 0x66, 0xc0,
	0xe1, 0xf8, 0xc0, 0x20, 0xb3, 0x66, 0x3f, 0x2f, 0x87, 0x01, 0xdd, 0x80,
	0x53, 0x19, 0x99, 0x43, 0xd2, 0xec, 0xc3, 0xfa, 0xd1, 0xed, 0xa8, 0xef,
	0xbf, 0xb4, 0x93, 0x5e, 0x26, 0x53,
];

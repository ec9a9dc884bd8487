// bandstand-core-client/bandstand-utils
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

mod id_string_macro;

// bandstand-core-client/bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use bandstand_utils::id_string;

id_string!(
    /// Server-assigned identifier of a conversation.
    ConversationId
);

id_string!(
    /// Optional server-computed identity of a conversation, preferred over the
    /// participant/listing pair when deduplicating.
    ConversationKey
);

id_string!(ListingId);

id_string!(
    /// Server-assigned identifier of a message. Unique within a thread.
    MessageId
);

id_string!(UserId);

use suifund::chain::signer::{SignedTransaction, SignerError, TransactionSigner};
use suifund::chain::transaction_builder::{CampaignTransactions, TransactionData};
use suifund::core::address::SuiAddress;
use suifund::core::forms::CreateCampaignForm;

/// Stand-in for a connected wallet: echoes the transaction back as if the
/// user had approved it. A real integration signs through the wallet SDK.
struct DemoSigner {
    address: SuiAddress,
}

impl TransactionSigner for DemoSigner {
    fn address(&self) -> Result<SuiAddress, SignerError> {
        Ok(self.address.clone())
    }

    fn sign(&self, tx: &TransactionData) -> Result<SignedTransaction, SignerError> {
        Ok(SignedTransaction {
            tx_bytes: tx.to_json().to_string(),
            signatures: vec!["<wallet signature>".to_string()],
        })
    }
}

fn main() {
    // Fill the create form the way the create page would
    let form = CreateCampaignForm {
        name: "Green Energy Project".to_string(),
        target: "80".to_string(),
        description: "Empowering sustainable future through clean energy.".to_string(),
        image_ref: "https://example.com/donation.jpg".to_string(),
        token: "SUI".to_string(),
    };

    // Validate: required fields, token support, amount format, cap
    let request = form.validate().expect("Form should validate");
    println!("=== Validated Request ===");
    println!("{:#?}", request);
    println!();

    let package_id = SuiAddress::from_string(
        "0x0000000000000000000000000000000000000000000000000000000000000abc",
    )
    .expect("Valid package id");
    let sender = SuiAddress::from_string(
        "0x0000000000000000000000000000000000000000000000000000000000000001",
    )
    .expect("Valid sender");

    // Build the Move call the wallet would be asked to sign
    let txs = CampaignTransactions::new(Some(package_id));
    let tx = txs
        .create_campaign(sender.clone(), &request)
        .expect("Transaction should build");
    println!("=== Transaction ===");
    println!("{}", serde_json::to_string_pretty(&tx.to_json()).unwrap());
    println!();

    // Hand it across the signing boundary
    let signer = DemoSigner { address: sender };
    let signed = signer.sign(&tx).expect("Demo signer never refuses");
    println!("=== Signed ===");
    println!("signatures: {:?}", signed.signatures);
}

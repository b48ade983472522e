//! In-process stand-in for a dev chain. It runs the ERC20Mock, SwapRouterMock
//! and SwapExampleV3 semantics straight off their calldata, so the operator
//! flows run end to end without a node.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use alloy::primitives::aliases::U24;
use alloy::primitives::{keccak256, Address, Bytes, B256, U256};
use alloy::sol_types::{SolCall, SolInterface, SolValue};

use swapex::libs::artifact::Artifact;
use swapex::libs::chain::{Chain, Receipt, TxRequest};
use swapex::libs::errors::ChainError;
use uniswaps::uniswap::{ISwapExampleV3, ISwapRouter, IERC20, POOL_FEE};

pub const ETHER: u128 = 1_000_000_000_000_000_000;

pub fn units(whole: u64, decimals: u8) -> U256 {
    U256::from(whole) * U256::from(10u64).pow(U256::from(decimals))
}

/// Minimal artifact for the contract under test; the mock chain only
/// reads the constructor arguments appended to it.
pub fn swap_example_artifact() -> Artifact {
    let json = r#"{
        "_format": "hh-sol-artifact-1",
        "contractName": "SwapExampleV3",
        "abi": [
            {"type":"constructor","stateMutability":"nonpayable","inputs":[
                {"name":"_swapRouter","type":"address","internalType":"contract ISwapRouter"},
                {"name":"_tokenA","type":"address","internalType":"address"},
                {"name":"_tokenB","type":"address","internalType":"address"}]},
            {"type":"function","name":"swapRouter","stateMutability":"view","inputs":[],
             "outputs":[{"name":"","type":"address","internalType":"contract ISwapRouter"}]},
            {"type":"function","name":"swapExactInputSingle","stateMutability":"nonpayable",
             "inputs":[{"name":"amountIn","type":"uint256","internalType":"uint256"}],
             "outputs":[{"name":"amountOut","type":"uint256","internalType":"uint256"}]}
        ],
        "bytecode": "0x608060405234801561001057600080fd5b50",
        "deployedBytecode": "0x"
    }"#;
    Artifact::from_json(std::path::Path::new("SwapExampleV3.json"), json)
        .expect("test artifact parses")
}

#[derive(Clone, Debug, Default)]
struct TokenState {
    decimals: u8,
    balances: HashMap<Address, U256>,
    allowances: HashMap<(Address, Address), U256>,
}

#[derive(Clone, Debug)]
enum Code {
    Token(TokenState),
    Router { reverts: bool },
    SwapExample { router: Address, token_a: Address, token_b: Address },
}

#[derive(Clone, Debug, Default)]
struct State {
    balances: HashMap<Address, U256>,
    nonces: HashMap<Address, u64>,
    code: HashMap<Address, Code>,
}

#[derive(Default)]
struct World {
    state: State,
    block: u64,
    receipts: HashMap<B256, Receipt>,
    submitted: Vec<(Address, TxRequest)>,
    rpc_calls: usize,
    offline: bool,
}

type Revert = String;

fn revert<T>(reason: &str) -> Result<T, Revert> {
    Err(reason.to_string())
}

impl State {
    fn next_nonce(&mut self, who: Address) -> u64 {
        let nonce = self.nonces.entry(who).or_default();
        let current = *nonce;
        *nonce += 1;
        current
    }

    fn token(&mut self, at: Address) -> Result<&mut TokenState, Revert> {
        match self.code.get_mut(&at) {
            Some(Code::Token(token)) => Ok(token),
            _ => revert("not a token"),
        }
    }

    fn execute(&mut self, sender: Address, to: Address, input: &[u8]) -> Result<Vec<u8>, Revert> {
        let code = self.code.get(&to).cloned();
        match code {
            Some(Code::Token(_)) => self.execute_token(sender, to, input),
            Some(Code::Router { reverts }) => self.execute_router(sender, to, reverts, input),
            Some(Code::SwapExample { router, token_a, token_b }) => {
                self.execute_swap_example(sender, to, router, token_a, token_b, input)
            }
            None => revert("call to an address without code"),
        }
    }

    fn execute_token(
        &mut self,
        sender: Address,
        at: Address,
        input: &[u8],
    ) -> Result<Vec<u8>, Revert> {
        let call = IERC20::IERC20Calls::abi_decode(input).map_err(|e| e.to_string())?;
        let token = self.token(at)?;
        match call {
            IERC20::IERC20Calls::decimals(_) => Ok(<alloy::sol_types::sol_data::Uint<8> as alloy::sol_types::SolType>::abi_encode(&token.decimals)),
            IERC20::IERC20Calls::balanceOf(c) => Ok(token
                .balances
                .get(&c.account)
                .copied()
                .unwrap_or_default()
                .abi_encode()),
            IERC20::IERC20Calls::allowance(c) => Ok(token
                .allowances
                .get(&(c.owner, c.spender))
                .copied()
                .unwrap_or_default()
                .abi_encode()),
            IERC20::IERC20Calls::approve(c) => {
                token.allowances.insert((sender, c.spender), c.amount);
                Ok(true.abi_encode())
            }
            IERC20::IERC20Calls::transfer(c) => {
                move_tokens(token, sender, c.to, c.amount)?;
                Ok(true.abi_encode())
            }
            IERC20::IERC20Calls::transferFrom(c) => {
                let allowed = token
                    .allowances
                    .get(&(c.from, sender))
                    .copied()
                    .unwrap_or_default();
                if allowed < c.amount {
                    return revert("ERC20: insufficient allowance");
                }
                token.allowances.insert((c.from, sender), allowed - c.amount);
                move_tokens(token, c.from, c.to, c.amount)?;
                Ok(true.abi_encode())
            }
            _ => revert("unsupported ERC20 call"),
        }
    }

    /// Pulls `amountIn` from the caller and pays out the same raw amount
    /// of `tokenOut` from its own balance.
    fn execute_router(
        &mut self,
        sender: Address,
        at: Address,
        reverts: bool,
        input: &[u8],
    ) -> Result<Vec<u8>, Revert> {
        let call = ISwapRouter::exactInputSingleCall::abi_decode(input).map_err(|e| e.to_string())?;
        if reverts {
            return revert("Transaction too old");
        }
        let p = call.params;
        let pull = IERC20::transferFromCall {
            from: sender,
            to: at,
            amount: p.amountIn,
        }
        .abi_encode();
        self.execute(at, p.tokenIn, &pull).map_err(|_| "STF".to_string())?;
        let amount_out = p.amountIn;
        if amount_out < p.amountOutMinimum {
            return revert("Too little received");
        }
        let pay = IERC20::transferCall { to: p.recipient, amount: amount_out }.abi_encode();
        self.execute(at, p.tokenOut, &pay).map_err(|_| "ST".to_string())?;
        Ok(amount_out.abi_encode())
    }

    /// Approves the router for `amountIn` of token A out of the contract's
    /// own balance and swaps it into token B for the caller.
    fn execute_swap_example(
        &mut self,
        sender: Address,
        at: Address,
        router: Address,
        token_a: Address,
        token_b: Address,
        input: &[u8],
    ) -> Result<Vec<u8>, Revert> {
        let call =
            ISwapExampleV3::ISwapExampleV3Calls::abi_decode(input).map_err(|e| e.to_string())?;
        match call {
            ISwapExampleV3::ISwapExampleV3Calls::swapRouter(_) => Ok(router.abi_encode()),
            ISwapExampleV3::ISwapExampleV3Calls::swapExactInputSingle(c) => {
                let approve = IERC20::approveCall {
                    spender: router,
                    amount: c.amountIn,
                }
                .abi_encode();
                self.execute(at, token_a, &approve)?;
                let params = ISwapRouter::ExactInputSingleParams {
                    tokenIn: token_a,
                    tokenOut: token_b,
                    fee: U24::from(POOL_FEE),
                    recipient: sender,
                    deadline: U256::MAX,
                    amountIn: c.amountIn,
                    amountOutMinimum: U256::ZERO,
                    sqrtPriceLimitX96: Default::default(),
                };
                let swap = ISwapRouter::exactInputSingleCall { params }.abi_encode();
                self.execute(at, router, &swap)
            }
        }
    }
}

fn move_tokens(
    token: &mut TokenState,
    from: Address,
    to: Address,
    amount: U256,
) -> Result<(), Revert> {
    let have = token.balances.get(&from).copied().unwrap_or_default();
    if have < amount {
        return revert("ERC20: transfer amount exceeds balance");
    }
    token.balances.insert(from, have - amount);
    *token.balances.entry(to).or_default() += amount;
    Ok(())
}

fn word_address(word: &[u8]) -> Address {
    Address::from_slice(&word[12..32])
}

/// Shared dev chain. Hand out one [`MockChain`] per signing account.
#[derive(Clone, Default)]
pub struct MockNet {
    world: Arc<Mutex<World>>,
}

impl MockNet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wallet(&self, signer: Address) -> MockChain {
        MockChain {
            net: self.clone(),
            signer,
        }
    }

    pub fn set_balance(&self, who: Address, wei: U256) {
        self.world.lock().unwrap().state.balances.insert(who, wei);
    }

    /// ERC20Mock(name, symbol, initialAccount, initialBalance).
    pub fn deploy_token_mock(
        &self,
        deployer: Address,
        decimals: u8,
        holder: Address,
        supply: U256,
    ) -> Address {
        let mut world = self.world.lock().unwrap();
        let nonce = world.state.next_nonce(deployer);
        let at = deployer.create(nonce);
        let mut token = TokenState {
            decimals,
            ..Default::default()
        };
        token.balances.insert(holder, supply);
        world.state.code.insert(at, Code::Token(token));
        at
    }

    pub fn deploy_router_mock(&self, deployer: Address, reverts: bool) -> Address {
        let mut world = self.world.lock().unwrap();
        let nonce = world.state.next_nonce(deployer);
        let at = deployer.create(nonce);
        world.state.code.insert(at, Code::Router { reverts });
        at
    }

    pub fn token_balance(&self, token: Address, who: Address) -> U256 {
        let world = self.world.lock().unwrap();
        match world.state.code.get(&token) {
            Some(Code::Token(t)) => t.balances.get(&who).copied().unwrap_or_default(),
            _ => U256::ZERO,
        }
    }

    /// Make every later request fail as if the endpoint were unreachable.
    pub fn go_offline(&self) {
        self.world.lock().unwrap().offline = true;
    }

    pub fn submitted(&self) -> usize {
        self.world.lock().unwrap().submitted.len()
    }

    pub fn rpc_calls(&self) -> usize {
        self.world.lock().unwrap().rpc_calls
    }

    pub fn has_code(&self, at: Address) -> bool {
        self.world.lock().unwrap().state.code.contains_key(&at)
    }

    fn with_world<T>(
        &self,
        f: impl FnOnce(&mut World) -> Result<T, ChainError>,
    ) -> Result<T, ChainError> {
        let mut world = self.world.lock().unwrap();
        world.rpc_calls += 1;
        if world.offline {
            return Err(ChainError::Rejected("connection refused".to_string()));
        }
        f(&mut world)
    }
}

#[derive(Clone)]
pub struct MockChain {
    net: MockNet,
    signer: Address,
}

impl MockChain {
    pub fn net(&self) -> &MockNet {
        &self.net
    }
}

fn create_swap_example(state: &mut State, at: Address, code: &[u8]) -> Result<(), Revert> {
    if code.len() <= 96 {
        return revert("creation code without constructor arguments");
    }
    let args = &code[code.len() - 96..];
    state.code.insert(
        at,
        Code::SwapExample {
            router: word_address(&args[0..32]),
            token_a: word_address(&args[32..64]),
            token_b: word_address(&args[64..96]),
        },
    );
    Ok(())
}

impl Chain for MockChain {
    fn signer(&self) -> Address {
        self.signer
    }

    async fn balance(&self, who: Address) -> Result<U256, ChainError> {
        self.net
            .with_world(|w| Ok(w.state.balances.get(&who).copied().unwrap_or_default()))
    }

    async fn submit(&self, tx: TxRequest) -> Result<B256, ChainError> {
        let sender = self.signer;
        self.net.with_world(|w| {
            let nonce = w.state.next_nonce(sender);
            let mut preimage = sender.to_vec();
            preimage.extend_from_slice(&nonce.to_be_bytes());
            let tx_hash = keccak256(&preimage);
            w.block += 1;

            let snapshot = w.state.clone();
            let out_of_gas = tx.gas_limit.is_some_and(|g| g < 21_000);
            let result = if out_of_gas {
                revert("out of gas")
            } else {
                match tx.to {
                    None => {
                        let at = sender.create(nonce);
                        create_swap_example(&mut w.state, at, &tx.input).map(|_| Some(at))
                    }
                    Some(to) => w.state.execute(sender, to, &tx.input).map(|_| None),
                }
            };
            let (status, contract_address) = match result {
                Ok(created) => (true, created),
                Err(_) => {
                    w.state = snapshot;
                    (false, None)
                }
            };
            w.receipts.insert(
                tx_hash,
                Receipt {
                    tx_hash,
                    block_number: Some(w.block),
                    gas_used: 21_000,
                    contract_address,
                    status,
                },
            );
            w.submitted.push((sender, tx));
            Ok(tx_hash)
        })
    }

    async fn wait_for_receipt(&self, tx_hash: B256) -> Result<Receipt, ChainError> {
        self.net.with_world(|w| {
            let receipt = w
                .receipts
                .get(&tx_hash)
                .cloned()
                .ok_or_else(|| ChainError::Rejected(format!("unknown transaction {tx_hash}")))?;
            if !receipt.status {
                return Err(ChainError::Reverted(tx_hash));
            }
            Ok(receipt)
        })
    }

    async fn call(&self, to: Address, input: Bytes) -> Result<Bytes, ChainError> {
        let sender = self.signer;
        self.net.with_world(|w| {
            let mut scratch = w.state.clone();
            scratch
                .execute(sender, to, &input)
                .map(Bytes::from)
                .map_err(|reason| ChainError::Rejected(format!("execution reverted: {reason}")))
        })
    }
}
